use core::fmt;

use crate::info::{ArrayInfo, ListInfo, MapInfo, OpaqueInfo, PointerInfo, PrimitiveInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The structural kind of a reflected type.
///
/// Every kind corresponds to a [`TypeInfo`] variant and a
/// [`ReflectRef`](crate::ops::ReflectRef) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Scalars and strings, see [`PrimitiveKind`](crate::info::PrimitiveKind).
    Primitive,
    /// `Box<T>`, `Arc<T>` and `Option<T>`.
    Pointer,
    /// Fixed size arrays, `[T; N]`.
    Array,
    /// Growable sequences, `Vec<T>` and `VecDeque<T>`.
    List,
    /// Key-value maps.
    Map,
    /// Everything without a structural view.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReflectKind::Primitive => "Primitive",
            ReflectKind::Pointer => "Pointer",
            ReflectKind::Array => "Array",
            ReflectKind::List => "List",
            ReflectKind::Map => "Map",
            ReflectKind::Opaque => "Opaque",
        })
    }
}

// -----------------------------------------------------------------------------
// ReflectKindError

/// Error returned by the `as_*` casts of [`TypeInfo`] and
/// [`ReflectRef`](crate::ops::ReflectRef) when the kind does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    /// Expected kind.
    pub expected: ReflectKind,
    /// Actually received kind.
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kind mismatch: expected `{}`, received `{}`",
            self.expected, self.received
        )
    }
}

impl core::error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information of a reflected type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info),
/// always `&'static`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{PrimitiveKind, ReflectKind, TypeInfo, Typed};
///
/// let info: &TypeInfo = <Vec<u8>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
///
/// let item = info.as_list().unwrap().item_info();
/// assert_eq!(item.as_primitive().unwrap().kind(), PrimitiveKind::U8);
/// ```
#[derive(Debug)]
pub enum TypeInfo {
    Primitive(PrimitiveInfo),
    Pointer(PointerInfo),
    Array(ArrayInfo),
    List(ListInfo),
    Map(MapInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`] if the kind is `", stringify!($kind), "`.")]
        #[inline]
        pub fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Primitive(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::type_path::impl_type_fn!();

    /// Returns the structural kind.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_method!(as_primitive: Primitive => PrimitiveInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use crate::info::{ReflectKind, Typed};

    #[test]
    fn cast_mismatch_reports_both_kinds() {
        let err = <Vec<u32>>::type_info().as_map().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Map);
        assert_eq!(err.received, ReflectKind::List);
        assert_eq!(
            err.to_string(),
            "kind mismatch: expected `Map`, received `List`"
        );
    }

    #[test]
    fn type_accessors_forward() {
        let info = <[u16; 3]>::type_info();
        assert!(info.type_is::<[u16; 3]>());
        assert_eq!(info.type_path(), "[u16; 3]");
        assert_eq!(info.as_array().unwrap().len(), 3);
    }
}
