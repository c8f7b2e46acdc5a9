use alloc::boxed::Box;
use core::hash::{BuildHasher, Hash};

use vc_utils::hash::{FixedHashState, NoOpHashState, hashbrown};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

impl TypePath for FixedHashState {
    #[inline]
    fn type_path() -> &'static str {
        "vc_utils::hash::FixedHashState"
    }

    #[inline]
    fn type_name() -> &'static str {
        "FixedHashState"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("vc_utils::hash")
    }
}

impl TypePath for NoOpHashState {
    #[inline]
    fn type_path() -> &'static str {
        "vc_utils::hash::NoOpHashState"
    }

    #[inline]
    fn type_name() -> &'static str {
        "NoOpHashState"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("vc_utils::hash")
    }
}

impl<K: TypePath, V: TypePath, S: TypePath> TypePath for hashbrown::HashMap<K, V, S> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "hashbrown::HashMap<",
                K::type_path(),
                ", ",
                V::type_path(),
                ", ",
                S::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["HashMap<", K::type_name(), ", ", V::type_name(), ">"])
        })
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("hashbrown")
    }
}

impl<K, V, S> Typed for hashbrown::HashMap<K, V, S>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: TypePath + BuildHasher + Send + Sync,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V, S> Reflect for hashbrown::HashMap<K, V, S>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: TypePath + BuildHasher + Send + Sync,
{
    crate::reflection::impl_reflect_cast_fn!(Map);
}

impl<K, V, S> Map for hashbrown::HashMap<K, V, S>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: TypePath + BuildHasher + Send + Sync,
{
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        let key = key.downcast_ref::<K>()?;
        hashbrown::HashMap::get(self, key).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(hashbrown::HashMap::iter(self).map(|(k, v)| (k.as_reflect(), v.as_reflect())))
    }
}

impl<K, V, S> GetTypeMeta for hashbrown::HashMap<K, V, S>
where
    K: Reflect + GetTypeMeta + Eq + Hash,
    V: Reflect + GetTypeMeta,
    S: TypePath + BuildHasher + Send + Sync,
{
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<K>();
        registry.register::<V>();
    }
}

#[cfg(test)]
mod tests {
    use vc_utils::hash::HashMap;

    use crate::info::Typed;

    #[test]
    fn fixed_state_map_path() {
        assert_eq!(
            <HashMap<u8, u8>>::type_info().type_path(),
            "hashbrown::HashMap<u8, u8, vc_utils::hash::FixedHashState>"
        );
    }
}
