use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use vc_utils::TypeIdMap;

use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime storage for type metadata, registered into the [`TypeRegistry`].
///
/// Contains a [`TypeInfo`] and a table of [`TypeTrait`]s keyed by their type.
///
/// # Examples
///
/// ```
/// use vc_reflect::registry::{TypeMeta, TypeTrait};
///
/// struct Tag;
/// impl TypeTrait for Tag {}
///
/// let mut meta = TypeMeta::of::<String>();
/// assert!(!meta.has_trait::<Tag>());
///
/// meta.insert_trait(Tag);
/// assert!(meta.has_trait::<Tag>());
/// assert_eq!(meta.type_name(), "String");
/// ```
pub struct TypeMeta {
    type_info: &'static TypeInfo,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Create a empty [`TypeMeta`] from a type.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self {
            type_info: T::type_info(),
            trait_table: TypeIdMap::new(),
        }
    }

    /// Returns the [`TypeInfo`].
    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.type_info.ty()
    }

    crate::info::type_path::impl_type_fn!();

    /// Insert a new [`TypeTrait`], replacing the old one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, val: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, val);
    }

    /// Get a [`TypeTrait`] reference, or return `None` if it's doesn't exist.
    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.trait_table
            .get(&TypeId::of::<T>())
            .and_then(|t| t.downcast_ref::<T>())
    }

    /// Returns `true` if the [`TypeTrait`] exists.
    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains_type::<T>()
    }

    /// Returns the number of [`TypeTrait`]s.
    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_info", &self.type_info)
            .field("trait_len", &self.trait_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Create a [`TypeMeta`] from a type.
///
/// Implemented for every builtin reflected type, user types get it from
/// [`impl_reflect_opaque!`](crate::impl_reflect_opaque).
pub trait GetTypeMeta: Typed {
    /// Returns the default [`TypeMeta`] for this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers other types needed by this type.
    ///
    /// Called after `Self` is inserted, so recursive types terminate.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
