//! Type capabilities that override structural encoding.
//!
//! A type opts in by implementing [`Mangled`] or [`BinaryMarshal`] and
//! attaching the matching type trait to its registry entry:
//!
//! ```
//! use vc_mangler::{Mangled, ManglerCache, TypeTraitMangled, leaf};
//! use vc_reflect::impl_reflect_opaque;
//!
//! struct UserId(u32);
//!
//! impl Mangled for UserId {
//!     fn mangle(&self, buf: &mut Vec<u8>) {
//!         leaf::append_u32(buf, self.0);
//!     }
//! }
//!
//! impl_reflect_opaque!(UserId(TypeTraitMangled));
//!
//! let cache = ManglerCache::new();
//! assert_eq!(cache.to_vec(&UserId(3)), [0, 0, 0, 3]);
//! ```

use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::info::Typed;
use vc_reflect::registry::{FromType, TypeTrait};

use crate::mangler::type_mismatch;

// -----------------------------------------------------------------------------
// Traits

/// A type that appends its own canonical bytes.
///
/// Takes precedence over every other encoding of the type.
pub trait Mangled {
    fn mangle(&self, buf: &mut Vec<u8>);
}

/// A type with a binary serialization.
///
/// The bytes are written with a length prefix.
pub trait BinaryMarshal {
    fn marshal_binary(&self) -> Vec<u8>;
}

// -----------------------------------------------------------------------------
// Type traits

/// Registry entry of a [`Mangled`] type.
#[derive(Clone, Copy)]
pub struct TypeTraitMangled {
    fun: fn(&dyn Reflect, &mut Vec<u8>),
}

impl TypeTraitMangled {
    /// Appends the bytes of `value` through its [`Mangled`] impl.
    ///
    /// # Panics
    ///
    /// If `value` is not of the type this entry was created for.
    #[inline]
    pub fn mangle(&self, value: &dyn Reflect, buf: &mut Vec<u8>) {
        (self.fun)(value, buf);
    }
}

impl<T: Mangled + Reflect + Typed> FromType<T> for TypeTraitMangled {
    fn from_type() -> Self {
        Self {
            fun: |value, buf| match value.downcast_ref::<T>() {
                Some(value) => value.mangle(buf),
                None => type_mismatch(T::type_path(), value),
            },
        }
    }
}

impl TypeTrait for TypeTraitMangled {}

/// Registry entry of a [`BinaryMarshal`] type.
#[derive(Clone, Copy)]
pub struct TypeTraitBinary {
    fun: fn(&dyn Reflect) -> Vec<u8>,
}

impl TypeTraitBinary {
    /// Returns the binary serialization of `value`.
    ///
    /// # Panics
    ///
    /// If `value` is not of the type this entry was created for.
    #[inline]
    pub fn marshal(&self, value: &dyn Reflect) -> Vec<u8> {
        (self.fun)(value)
    }
}

impl<T: BinaryMarshal + Reflect + Typed> FromType<T> for TypeTraitBinary {
    fn from_type() -> Self {
        Self {
            fun: |value| match value.downcast_ref::<T>() {
                Some(value) => value.marshal_binary(),
                None => type_mismatch(T::type_path(), value),
            },
        }
    }
}

impl TypeTrait for TypeTraitBinary {}
