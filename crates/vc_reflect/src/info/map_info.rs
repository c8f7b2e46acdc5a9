use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed};

/// Type information of a key-value map.
#[derive(Debug)]
pub struct MapInfo {
    ty: Type,
    key_id: TypeId,
    value_id: TypeId,
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<TMap: TypePath, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_id: TypeId::of::<TKey>(),
            value_id: TypeId::of::<TValue>(),
            key_info: TKey::type_info,
            value_info: TValue::type_info,
        }
    }

    crate::info::type_path::impl_type_fn!(ty);

    /// Returns the [`TypeId`] of the keys.
    #[inline]
    pub const fn key_id(&self) -> TypeId {
        self.key_id
    }

    /// Returns the [`TypeId`] of the values.
    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_id
    }

    /// Returns the [`TypeInfo`] of the keys.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
