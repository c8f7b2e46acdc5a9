use alloc::collections::VecDeque;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::{List, ListItemIter, PrimitiveSlice};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

impl<T: TypePath> TypePath for VecDeque<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["alloc::collections::VecDeque<", T::type_path(), ">"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["VecDeque<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<T: Reflect + Typed> Typed for VecDeque<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for VecDeque<T> {
    crate::reflection::impl_reflect_cast_fn!(List);
}

impl<T: Reflect + Typed> List for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }

    /// Only a contiguous ring buffer has a slice view.
    fn as_primitive_slice(&self) -> Option<PrimitiveSlice<'_>> {
        match self.as_slices() {
            (items, []) | ([], items) => T::slice_as_primitive(items),
            _ => None,
        }
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for VecDeque<T> {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;

    use crate::ops::List;

    #[test]
    fn wrapped_ring_has_no_slice_view() {
        let mut ring: VecDeque<u8> = VecDeque::with_capacity(4);
        let cap = ring.capacity();
        ring.extend((0..cap).map(|i| i as u8));
        assert!(ring.as_primitive_slice().is_some());

        ring.pop_front();
        ring.push_back(0xFF);
        let (front, back) = ring.as_slices();
        assert!(!front.is_empty() && !back.is_empty());
        assert!(ring.as_primitive_slice().is_none());
        assert_eq!(List::iter(&ring).count(), cap);
    }
}
