use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Array, List, Map, Pointer, Primitive};

/// An immutable enumeration of "kinds" of a reflected value.
///
/// Created by [`Reflect::reflect_ref`]. Each variant holds the value cast to
/// the matching subtrait, opaque values stay `&dyn Reflect`.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Primitive(&'a dyn Primitive),
    Pointer(&'a dyn Pointer),
    Array(&'a dyn Array),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $trait:ident) => {
        #[doc = concat!("Casts to `&dyn ", stringify!($trait), "` if the kind is `", stringify!($kind), "`.")]
        #[inline]
        pub fn $name(self) -> Result<&'a dyn $trait, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the kind of this handle.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the handle as a plain reflected value.
    #[inline]
    pub fn as_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Primitive(value) => value,
            Self::Pointer(value) => value,
            Self::Array(value) => value,
            Self::List(value) => value,
            Self::Map(value) => value,
            Self::Opaque(value) => value,
        }
    }

    impl_cast_method!(as_primitive: Primitive => Primitive);
    impl_cast_method!(as_pointer: Pointer => Pointer);
    impl_cast_method!(as_array: Array => Array);
    impl_cast_method!(as_list: List => List);
    impl_cast_method!(as_map: Map => Map);
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn as_reflect_keeps_identity() {
        let value = Box::new(7_u8);
        let handle = value.reflect_ref();
        assert_eq!(handle.kind(), ReflectKind::Pointer);
        assert!(handle.as_reflect().is::<Box<u8>>());
        assert!(handle.as_list().is_err());

        let pointee = handle.as_pointer().unwrap().pointee().unwrap();
        assert_eq!(pointee.downcast_ref::<u8>(), Some(&7));
    }
}
