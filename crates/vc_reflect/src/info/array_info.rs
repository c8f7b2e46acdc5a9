use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed};

/// Type information of a fixed size array, `[T; N]`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <[u8; 4]>::type_info().as_array().unwrap();
/// assert_eq!(info.len(), 4);
/// assert!(info.item_info().type_is::<u8>());
/// ```
#[derive(Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_id: TypeId,
    item_info: fn() -> &'static TypeInfo,
    len: usize,
}

impl ArrayInfo {
    /// Creates a new [`ArrayInfo`].
    #[inline]
    pub const fn new<TArray: TypePath, TItem: Typed>(len: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            len,
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

    /// Returns the fixed length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }
}
