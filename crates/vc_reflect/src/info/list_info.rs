use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed};

/// Type information of a growable sequence such as `Vec<T>`.
#[derive(Debug)]
pub struct ListInfo {
    ty: Type,
    item_id: TypeId,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    /// Creates a new [`ListInfo`].
    #[inline]
    pub const fn new<TList: TypePath, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    crate::info::type_path::impl_type_fn!(ty);

    /// Returns the [`TypeId`] of the items.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
