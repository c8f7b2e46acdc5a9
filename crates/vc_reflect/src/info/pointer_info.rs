use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed};

/// Type information of a single level of indirection.
///
/// `Box<T>` and `Arc<T>` always point to a value, `Option<T>` is nullable.
#[derive(Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    pointee_info: fn() -> &'static TypeInfo,
    nullable: bool,
}

impl PointerInfo {
    /// Creates a new [`PointerInfo`] for pointer type `P` with pointee `T`.
    #[inline]
    pub const fn new<P: TypePath, T: Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<P>(),
            pointee_id: TypeId::of::<T>(),
            pointee_info: T::type_info,
            nullable,
        }
    }

    crate::info::type_path::impl_type_fn!(ty);

    /// Returns the [`TypeId`] of the pointee.
    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }

    /// Returns `true` if the pointer may be nil.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}
