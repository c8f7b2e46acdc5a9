use core::fmt;

use crate::info::{Type, TypePath};

// -----------------------------------------------------------------------------
// PrimitiveKind

/// The scalar or string layout of a primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    /// [`Complex<f32>`](crate::impls::Complex).
    Complex64,
    /// [`Complex<f64>`](crate::impls::Complex).
    Complex128,
    /// `String`, `&'static str` and `Box<str>`.
    String,
}

impl PrimitiveKind {
    /// Returns the encoded width of a fixed width kind.
    ///
    /// `isize` and `usize` are normalized to 8 bytes, `String` has no fixed width.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::PrimitiveKind;
    ///
    /// assert_eq!(PrimitiveKind::I32.fixed_width(), Some(4));
    /// assert_eq!(PrimitiveKind::Usize.fixed_width(), Some(8));
    /// assert_eq!(PrimitiveKind::String.fixed_width(), None);
    /// ```
    pub const fn fixed_width(self) -> Option<usize> {
        Some(match self {
            Self::Bool | Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::Char | Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::Isize | Self::Usize | Self::F64 | Self::Complex64 => 8,
            Self::I128 | Self::U128 | Self::Complex128 => 16,
            Self::String => return None,
        })
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// PrimitiveInfo

/// Type information of a primitive type.
#[derive(Debug)]
pub struct PrimitiveInfo {
    ty: Type,
    kind: PrimitiveKind,
}

impl PrimitiveInfo {
    /// Creates a new [`PrimitiveInfo`].
    #[inline]
    pub const fn new<T: TypePath>(kind: PrimitiveKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    crate::info::type_path::impl_type_fn!(ty);

    /// Returns the primitive layout.
    #[inline]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }
}
