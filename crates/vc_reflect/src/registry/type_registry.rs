use alloc::boxed::Box;
use alloc::string::String;
use core::any::TypeId;
use core::fmt;
use std::time::SystemTime;

use vc_utils::TypeIdMap;
use vc_utils::hash::HashMap;

use crate::impls::Complex;
use crate::info::TypeInfo;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of reflected types.
///
/// Stores [`TypeMeta`] by [`TypeId`], with an index by type path.
/// Registering a type also registers the types it depends on, such as the
/// item type of a `Vec<T>`.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// assert!(registry.contains(TypeId::of::<u8>()));
///
/// registry.register::<Vec<Option<u8>>>();
/// assert!(registry.contains(TypeId::of::<Option<u8>>()));
///
/// let meta = registry.get_with_type_path("alloc::vec::Vec<core::option::Option<u8>>");
/// assert!(meta.is_some());
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::default(),
        }
    }

    /// Create a [`TypeRegistry`] with the builtin leaf types registered.
    ///
    /// Includes the primitive types, the string types, `Complex<f32>`,
    /// `Complex<f64>` and `SystemTime`, plus `chrono::DateTime<Utc>` and
    /// `http::Uri` when their features are enabled.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<Complex<f32>>();
        registry.register::<Complex<f64>>();
        registry.register::<String>();
        registry.register::<&'static str>();
        registry.register::<Box<str>>();
        registry.register::<SystemTime>();
        #[cfg(feature = "chrono")]
        registry.register::<chrono::DateTime<chrono::Utc>>();
        #[cfg(feature = "http")]
        registry.register::<http::Uri>();
        registry
    }

    // If `type_id` already exists, does nothing and returns `false`.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        let type_path_to_id = &mut self.type_path_to_id;
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            type_path_to_id.insert(meta.type_path(), type_id);
            meta
        })
    }

    /// Register a type and its dependencies.
    ///
    /// Does nothing if the type is already registered.
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Register all types submitted with [`impl_auto_register!`].
    ///
    /// Returns `false` if static registration is not supported on the
    /// current platform, or if the "auto_register" feature is disabled.
    ///
    /// [`impl_auto_register!`]: crate::impl_auto_register
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;

            for registration in inventory::iter::<auto_register::AutoRegistration> {
                registration.register(self);
            }
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Insert a [`TypeTrait`] into the meta of `T`, registering `T` first if needed.
    pub fn register_type_trait<T: GetTypeMeta, D: TypeTrait + FromType<T>>(&mut self) {
        self.register::<T>();
        if let Some(meta) = self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            meta.insert_trait(D::from_type());
        }
    }

    /// Returns `true` if the type is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the mutable [`TypeMeta`] of the type.
    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Returns the [`TypeMeta`] with the given type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        let type_id = self.type_path_to_id.get(type_path)?;
        self.get(*type_id)
    }

    /// Returns the [`TypeTrait`] `T` of the type.
    #[inline]
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        self.get(type_id)?.get_trait::<T>()
    }

    /// Returns the [`TypeInfo`] of the type.
    #[inline]
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.type_path_to_id.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::any::TypeId;

    use crate::info::Typed;
    use crate::registry::{FromType, TypeRegistry, TypeTrait};

    struct TypeTraitWidth(usize);

    impl TypeTrait for TypeTraitWidth {}

    impl<T: Typed> FromType<T> for TypeTraitWidth {
        fn from_type() -> Self {
            Self(core::mem::size_of::<T>())
        }
    }

    #[test]
    fn register_pulls_dependencies() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Vec<[u16; 2]>>();
        assert!(registry.contains(TypeId::of::<[u16; 2]>()));
        assert!(registry.contains(TypeId::of::<u16>()));
        assert_eq!(registry.len(), 3);
        assert!(registry.get_with_type_path("[u16; 2]").is_some());
    }

    #[test]
    fn register_type_trait_registers_the_type() {
        let mut registry = TypeRegistry::empty();
        registry.register_type_trait::<u32, TypeTraitWidth>();
        let width = registry.get_type_trait::<TypeTraitWidth>(TypeId::of::<u32>());
        assert_eq!(width.map(|w| w.0), Some(4));
        assert!(registry.get_type_trait::<TypeTraitWidth>(TypeId::of::<u8>()).is_none());
    }

    #[test]
    fn builtin_registry() {
        let registry = TypeRegistry::new();
        assert!(registry.contains(TypeId::of::<std::time::SystemTime>()));
        assert!(registry.contains(TypeId::of::<&'static str>()));
        assert!(registry.get_type_info(TypeId::of::<f64>()).is_some());
    }
}
