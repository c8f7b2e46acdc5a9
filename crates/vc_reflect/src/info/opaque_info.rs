use crate::info::{Type, TypePath};

/// Type information of a type without a structural view.
///
/// Such types are only usable through the type traits registered in their
/// [`TypeMeta`](crate::registry::TypeMeta).
#[derive(Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    crate::info::type_path::impl_type_fn!(ty);
}
