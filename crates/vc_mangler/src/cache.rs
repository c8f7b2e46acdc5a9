use alloc::vec::Vec;
use core::any::TypeId;
use std::sync::{OnceLock, PoisonError, RwLock};

use vc_reflect::Reflect;
use vc_reflect::registry::{FromType, GetTypeMeta, TypeRegistry, TypeTrait};
use vc_utils::TypeIdMap;

use crate::error::MangleError;
use crate::load::load_mangler;
use crate::mangler::Mangler;

// -----------------------------------------------------------------------------
// ManglerCache

/// A registry of types together with the encoders resolved for them.
///
/// Resolved encoders are kept and reused. Hits only take a read lock and
/// never wait on a resolution in progress, so a shared cache can be used
/// from many threads.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_mangler::ManglerCache;
///
/// let cache = ManglerCache::new();
///
/// let a = HashMap::from([("x", 1_u8), ("y", 2)]);
/// let b = HashMap::from([("y", 2_u8), ("x", 1)]);
/// assert_eq!(cache.to_vec(&a), cache.to_vec(&b));
/// ```
pub struct ManglerCache {
    registry: RwLock<TypeRegistry>,
    manglers: RwLock<TypeIdMap<Mangler>>,
}

impl Default for ManglerCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ManglerCache {
    /// Creates a cache over [`TypeRegistry::new`] plus all statically
    /// submitted types.
    pub fn new() -> Self {
        let mut registry = TypeRegistry::new();
        if !registry.auto_register() {
            log::debug!("static type registration is not available");
        }
        Self::with_registry(registry)
    }

    /// Creates a cache over an existing registry.
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
            manglers: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Register a type and its dependencies.
    pub fn register<T: GetTypeMeta>(&self) {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register::<T>();
    }

    /// Attach a type trait to `T`, such as [`TypeTraitMangled`].
    ///
    /// Resolved encoders are dropped, since they may depend on the traits of `T`.
    ///
    /// [`TypeTraitMangled`]: crate::TypeTraitMangled
    pub fn register_type_trait<T: GetTypeMeta, D: TypeTrait + FromType<T>>(&self) {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        registry.register_type_trait::<T, D>();
        // Cleared before `registry` is released, so no resolution against the
        // old traits can be inserted afterwards.
        self.clear();
    }

    /// Returns the encoder of `T`, registering `T` if needed.
    pub fn get<T: GetTypeMeta>(&self) -> Result<Mangler, MangleError> {
        let type_id = TypeId::of::<T>();
        if let Some(mangler) = self.cached(type_id, T::type_path()) {
            return Ok(mangler);
        }
        self.register::<T>();
        self.resolve(type_id, None)
    }

    /// Returns the encoder of a registered type.
    pub fn get_by_id(&self, type_id: TypeId) -> Result<Mangler, MangleError> {
        self.cached_or_resolve(type_id, None)
    }

    fn cached_or_resolve(
        &self,
        type_id: TypeId,
        sample: Option<&dyn Reflect>,
    ) -> Result<Mangler, MangleError> {
        let path = sample.map_or("", |value| value.reflect_type_path());
        match self.cached(type_id, path) {
            Some(mangler) => Ok(mangler),
            None => self.resolve(type_id, sample),
        }
    }

    fn cached(&self, type_id: TypeId, type_path: &str) -> Option<Mangler> {
        let mangler = self
            .manglers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned();
        if mangler.is_some() {
            log::trace!("cache hit for `{type_path}` {type_id:?}");
        }
        mangler
    }

    // Lock order is `registry` then `manglers`, never the reverse. The
    // `manglers` write lock is only held to insert, so hits of other types
    // never wait on a resolution.
    fn resolve(
        &self,
        type_id: TypeId,
        sample: Option<&dyn Reflect>,
    ) -> Result<Mangler, MangleError> {
        let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
        let result = registry
            .get_type_info(type_id)
            .ok_or(MangleError::NullType { type_id })
            .and_then(|info| load_mangler(info, sample, &registry));

        match result {
            Ok(mangler) => {
                // Concurrent resolutions of one type are equivalent, the first insert wins.
                let mut manglers = self.manglers.write().unwrap_or_else(PoisonError::into_inner);
                Ok(manglers.get_or_insert(type_id, || mangler).clone())
            }
            Err(err) => {
                log::warn!("failed to resolve mangler for {type_id:?}: {err}");
                Err(err)
            }
        }
    }

    /// Appends the canonical bytes of `value` to `buf`.
    pub fn try_append<T: Reflect + GetTypeMeta>(
        &self,
        buf: &mut Vec<u8>,
        value: &T,
    ) -> Result<(), MangleError> {
        self.get::<T>()?.mangle(buf, value);
        Ok(())
    }

    /// Appends the canonical bytes of `value` to `buf`.
    ///
    /// # Panics
    ///
    /// If no encoder can be resolved for `T`.
    pub fn append<T: Reflect + GetTypeMeta>(&self, buf: &mut Vec<u8>, value: &T) {
        if let Err(err) = self.try_append(buf, value) {
            panic!("cannot mangle type `{}`: {err}", T::type_path());
        }
    }

    /// Appends the canonical bytes of a type erased value.
    ///
    /// The type of `value` must already be registered.
    pub fn try_append_dyn(&self, buf: &mut Vec<u8>, value: &dyn Reflect) -> Result<(), MangleError> {
        self.cached_or_resolve(value.ty_id(), Some(value))?
            .mangle(buf, value);
        Ok(())
    }

    /// Returns the canonical bytes of `value`.
    ///
    /// # Panics
    ///
    /// If no encoder can be resolved for `T`.
    pub fn to_vec<T: Reflect + GetTypeMeta>(&self, value: &T) -> Vec<u8> {
        let mut buf = Vec::new();
        self.append(&mut buf, value);
        buf
    }

    /// Returns the number of resolved encoders.
    pub fn len(&self) -> usize {
        self.manglers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Drops every resolved encoder, registrations are kept.
    pub fn clear(&self) {
        self.manglers.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

// -----------------------------------------------------------------------------
// Global

/// Returns the process wide [`ManglerCache`].
pub fn global() -> &'static ManglerCache {
    static GLOBAL: OnceLock<ManglerCache> = OnceLock::new();
    GLOBAL.get_or_init(ManglerCache::new)
}

/// [`ManglerCache::append`] on the [`global`] cache.
#[inline]
pub fn append<T: Reflect + GetTypeMeta>(buf: &mut Vec<u8>, value: &T) {
    global().append(buf, value);
}

/// [`ManglerCache::try_append`] on the [`global`] cache.
#[inline]
pub fn try_append<T: Reflect + GetTypeMeta>(buf: &mut Vec<u8>, value: &T) -> Result<(), MangleError> {
    global().try_append(buf, value)
}

/// [`ManglerCache::to_vec`] on the [`global`] cache.
///
/// # Examples
///
/// ```
/// assert_eq!(vc_mangler::to_vec(&5_i32), [0, 0, 0, 5]);
/// ```
#[inline]
pub fn to_vec<T: Reflect + GetTypeMeta>(value: &T) -> Vec<u8> {
    global().to_vec(value)
}
