use alloc::sync::Arc;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

impl<T: TypePath> TypePath for Arc<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::sync::Arc<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Arc<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::sync")
    }
}

impl<T: Reflect + Typed> Typed for Arc<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed> Reflect for Arc<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);
}

impl<T: Reflect + Typed> Pointer for Arc<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Arc<T> {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}
