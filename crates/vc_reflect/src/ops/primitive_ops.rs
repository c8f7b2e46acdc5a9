use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::impls::Complex;
use crate::info::PrimitiveKind;

// -----------------------------------------------------------------------------
// Primitive

/// A reflected scalar or string.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::{Primitive, PrimitiveRef};
///
/// assert!(matches!(5_i32.primitive_ref(), PrimitiveRef::I32(5)));
/// assert!(matches!("ab".primitive_ref(), PrimitiveRef::Str("ab")));
/// ```
pub trait Primitive: Reflect {
    /// Returns a view of the value.
    fn primitive_ref(&self) -> PrimitiveRef<'_>;
}

/// A copied scalar, or a borrowed string, read from a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveRef<'a> {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Complex64(Complex<f32>),
    Complex128(Complex<f64>),
    Str(&'a str),
}

impl PrimitiveRef<'_> {
    /// Returns the layout of the viewed value.
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::Char(_) => PrimitiveKind::Char,
            Self::I8(_) => PrimitiveKind::I8,
            Self::I16(_) => PrimitiveKind::I16,
            Self::I32(_) => PrimitiveKind::I32,
            Self::I64(_) => PrimitiveKind::I64,
            Self::I128(_) => PrimitiveKind::I128,
            Self::Isize(_) => PrimitiveKind::Isize,
            Self::U8(_) => PrimitiveKind::U8,
            Self::U16(_) => PrimitiveKind::U16,
            Self::U32(_) => PrimitiveKind::U32,
            Self::U64(_) => PrimitiveKind::U64,
            Self::U128(_) => PrimitiveKind::U128,
            Self::Usize(_) => PrimitiveKind::Usize,
            Self::F32(_) => PrimitiveKind::F32,
            Self::F64(_) => PrimitiveKind::F64,
            Self::Complex64(_) => PrimitiveKind::Complex64,
            Self::Complex128(_) => PrimitiveKind::Complex128,
            Self::Str(_) => PrimitiveKind::String,
        }
    }
}

// -----------------------------------------------------------------------------
// PrimitiveSlice

/// A contiguous run of primitive values.
///
/// Returned by [`Array::as_primitive_slice`] and [`List::as_primitive_slice`]
/// so that consumers can walk the items without per-item dynamic dispatch.
///
/// [`Array::as_primitive_slice`]: crate::ops::Array::as_primitive_slice
/// [`List::as_primitive_slice`]: crate::ops::List::as_primitive_slice
#[derive(Debug, Clone, Copy)]
pub enum PrimitiveSlice<'a> {
    Bool(&'a [bool]),
    Char(&'a [char]),
    I8(&'a [i8]),
    I16(&'a [i16]),
    I32(&'a [i32]),
    I64(&'a [i64]),
    I128(&'a [i128]),
    Isize(&'a [isize]),
    U8(&'a [u8]),
    U16(&'a [u16]),
    U32(&'a [u32]),
    U64(&'a [u64]),
    U128(&'a [u128]),
    Usize(&'a [usize]),
    F32(&'a [f32]),
    F64(&'a [f64]),
    Complex64(&'a [Complex<f32>]),
    Complex128(&'a [Complex<f64>]),
    String(&'a [String]),
    Str(&'a [&'static str]),
    BoxStr(&'a [Box<str>]),
}

impl PrimitiveSlice<'_> {
    /// Returns the number of items.
    pub const fn len(&self) -> usize {
        match self {
            Self::Bool(s) => s.len(),
            Self::Char(s) => s.len(),
            Self::I8(s) => s.len(),
            Self::I16(s) => s.len(),
            Self::I32(s) => s.len(),
            Self::I64(s) => s.len(),
            Self::I128(s) => s.len(),
            Self::Isize(s) => s.len(),
            Self::U8(s) => s.len(),
            Self::U16(s) => s.len(),
            Self::U32(s) => s.len(),
            Self::U64(s) => s.len(),
            Self::U128(s) => s.len(),
            Self::Usize(s) => s.len(),
            Self::F32(s) => s.len(),
            Self::F64(s) => s.len(),
            Self::Complex64(s) => s.len(),
            Self::Complex128(s) => s.len(),
            Self::String(s) => s.len(),
            Self::Str(s) => s.len(),
            Self::BoxStr(s) => s.len(),
        }
    }

    /// Returns `true` if there are no items.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the layout of the items.
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::Char(_) => PrimitiveKind::Char,
            Self::I8(_) => PrimitiveKind::I8,
            Self::I16(_) => PrimitiveKind::I16,
            Self::I32(_) => PrimitiveKind::I32,
            Self::I64(_) => PrimitiveKind::I64,
            Self::I128(_) => PrimitiveKind::I128,
            Self::Isize(_) => PrimitiveKind::Isize,
            Self::U8(_) => PrimitiveKind::U8,
            Self::U16(_) => PrimitiveKind::U16,
            Self::U32(_) => PrimitiveKind::U32,
            Self::U64(_) => PrimitiveKind::U64,
            Self::U128(_) => PrimitiveKind::U128,
            Self::Usize(_) => PrimitiveKind::Usize,
            Self::F32(_) => PrimitiveKind::F32,
            Self::F64(_) => PrimitiveKind::F64,
            Self::Complex64(_) => PrimitiveKind::Complex64,
            Self::Complex128(_) => PrimitiveKind::Complex128,
            Self::String(_) | Self::Str(_) | Self::BoxStr(_) => PrimitiveKind::String,
        }
    }
}
