use alloc::string::ToString;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ArrayInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Array, ArrayItemIter, PrimitiveSlice};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_path(), "; ", &N.to_string(), "]"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_name(), "; ", &N.to_string(), "]"]))
    }
}

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(Array);
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }

    #[inline]
    fn as_primitive_slice(&self) -> Option<PrimitiveSlice<'_>> {
        T::slice_as_primitive(self)
    }
}

impl<T: Reflect + GetTypeMeta, const N: usize> GetTypeMeta for [T; N] {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::info::Typed;
    use crate::ops::{Array, PrimitiveSlice};

    #[test]
    fn array_views() {
        let arr = [3_u32, 4];
        assert_eq!(<[u32; 2]>::type_info().type_path(), "[u32; 2]");
        assert_eq!(arr.iter().count(), 2);
        assert_eq!(Array::get(&arr, 1).unwrap().downcast_ref::<u32>(), Some(&4));
        assert!(matches!(arr.as_primitive_slice(), Some(PrimitiveSlice::U32(&[3, 4]))));

        let nested = [[1_u8], [2]];
        assert!(nested.as_primitive_slice().is_none());

        let strings = [String::from("x")];
        assert!(matches!(strings.as_primitive_slice(), Some(PrimitiveSlice::String(_))));
    }
}
