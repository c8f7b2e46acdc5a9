use alloc::boxed::Box;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;
use std::hash::RandomState;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

impl TypePath for RandomState {
    #[inline]
    fn type_path() -> &'static str {
        "std::hash::RandomState"
    }

    #[inline]
    fn type_name() -> &'static str {
        "RandomState"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::hash")
    }
}

impl<K: TypePath, V: TypePath, S: TypePath> TypePath for HashMap<K, V, S> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "std::collections::HashMap<",
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
        Some("std::collections")
    }
}

impl<K, V, S> Typed for HashMap<K, V, S>
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

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: TypePath + BuildHasher + Send + Sync,
{
    crate::reflection::impl_reflect_cast_fn!(Map);
}

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: TypePath + BuildHasher + Send + Sync,
{
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        let key = key.downcast_ref::<K>()?;
        HashMap::get(self, key).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(HashMap::iter(self).map(|(k, v)| (k.as_reflect(), v.as_reflect())))
    }
}

impl<K, V, S> GetTypeMeta for HashMap<K, V, S>
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
    use std::collections::HashMap;

    use crate::info::Typed;
    use crate::ops::Map;

    #[test]
    fn hash_map_infos() {
        let info = <HashMap<u8, bool>>::type_info().as_map().unwrap();
        assert!(info.key_info().type_is::<u8>());
        assert!(info.value_info().type_is::<bool>());
        assert_eq!(
            info.type_path(),
            "std::collections::HashMap<u8, bool, std::hash::RandomState>"
        );

        let map = HashMap::from([(1_u8, true), (2, false)]);
        assert_eq!(Map::len(&map), 2);
        assert_eq!(Map::get(&map, &2_u8).unwrap().downcast_ref::<bool>(), Some(&false));
        assert!(Map::get(&map, &2_u16).is_none());
        assert_eq!(Map::iter(&map).count(), 2);
    }
}
