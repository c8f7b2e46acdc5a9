use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::{List, ListItemIter, Pointer, PrimitiveSlice};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// Box<T>

impl<T: TypePath> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::boxed::Box<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Box<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Box<T> {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Box<[T]>

impl<T: TypePath> TypePath for Box<[T]> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::boxed::Box<[", T::type_path(), "]>"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Box<[", T::type_name(), "]>"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl<T: Reflect + Typed> Typed for Box<[T]> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Box<[T]> {
    crate::reflection::impl_reflect_cast_fn!(List);
}

impl<T: Reflect + Typed> List for Box<[T]> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }

    #[inline]
    fn as_primitive_slice(&self) -> Option<PrimitiveSlice<'_>> {
        T::slice_as_primitive(self)
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Box<[T]> {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;

    use crate::info::{ReflectKind, Typed};
    use crate::ops::{List, Pointer};

    #[test]
    fn box_is_a_non_null_pointer() {
        let info = <Box<u8>>::type_info().as_pointer().unwrap();
        assert!(!info.is_nullable());
        assert!(info.pointee_info().type_is::<u8>());
        assert_eq!(info.type_path(), "alloc::boxed::Box<u8>");

        let value = Box::new(9_u8);
        assert_eq!(value.pointee().unwrap().downcast_ref::<u8>(), Some(&9));
    }

    #[test]
    fn boxed_slice_is_a_list() {
        assert_eq!(<Box<[i16]>>::type_info().kind(), ReflectKind::List);
        let value: Box<[i16]> = vec![1, 2, 3].into_boxed_slice();
        assert_eq!(List::len(&value), 3);
        assert!(value.as_primitive_slice().is_some());
    }
}
