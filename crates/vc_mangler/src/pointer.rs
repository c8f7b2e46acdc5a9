use alloc::vec::Vec;

use vc_reflect::info::TypeInfo;
use vc_reflect::ops::ReflectRef;
use vc_reflect::registry::TypeRegistry;

use crate::error::MangleError;
use crate::iter::iter_array;
use crate::kind::{known_array, known_ptr};
use crate::leaf;
use crate::load::load;
use crate::mangler::{HandleMangler, Loaded, type_mismatch};

// -----------------------------------------------------------------------------
// Indirection

/// A chain of `count` pointers in front of a value encoded by `inner`.
///
/// A nil at any level is written as [`NIL`](leaf::NIL) and ends the value.
/// Otherwise [`PRESENT`](leaf::PRESENT) is written once, followed by the
/// encoding of the final target, so the depth of the chain is not visible.
#[derive(Debug, Clone)]
pub struct Indirection {
    count: usize,
    inner: HandleMangler,
}

impl Indirection {
    /// Creates a new [`Indirection`], `count` is at least 1.
    #[inline]
    pub fn new(count: usize, inner: HandleMangler) -> Self {
        Self {
            count: count.max(1),
            inner,
        }
    }

    /// Returns the number of pointers to dereference.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mangle(&self, buf: &mut Vec<u8>, handle: ReflectRef<'_>) {
        let mut current = handle;
        for _ in 0..self.count {
            let ReflectRef::Pointer(pointer) = current else {
                type_mismatch("pointer", current.as_reflect())
            };
            match pointer.pointee() {
                Some(target) => current = target.reflect_ref(),
                None => {
                    buf.push(leaf::NIL);
                    return;
                }
            }
        }
        buf.push(leaf::PRESENT);
        self.inner.mangle(buf, current);
    }

    #[inline]
    pub fn into_handle(self) -> HandleMangler {
        HandleMangler::new(move |buf, handle| self.mangle(buf, handle))
    }
}

/// Strips every pointer level, returns the final target and the depth.
pub fn collapse(info: &'static TypeInfo) -> (&'static TypeInfo, usize) {
    let mut target = info;
    let mut count = 0;
    while let TypeInfo::Pointer(pointer) = target {
        target = pointer.pointee_info();
        count += 1;
    }
    (target, count)
}

// -----------------------------------------------------------------------------
// Resolver

pub(crate) fn load_pointer(
    info: &'static TypeInfo,
    registry: &TypeRegistry,
) -> Result<Loaded, MangleError> {
    let (target, count) = collapse(info);

    let inner = match target {
        TypeInfo::Array(array) => match array.item_info() {
            TypeInfo::Primitive(item) => known_array(item.kind()),
            item => iter_array(load(item, None, registry)?),
        },
        TypeInfo::Primitive(primitive) if count == 1 => {
            return Ok(known_ptr(primitive.kind(), info.type_path()).into());
        }
        _ => load(target, None, registry)?.into_handle(),
    };

    Ok(Indirection::new(count, inner).into_handle().into())
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::info::{TypeInfo, Typed};
    use vc_reflect::registry::TypeRegistry;

    use super::{collapse, load_pointer};
    use crate::Mangler;

    fn pointer_mangler(info: &'static TypeInfo) -> Mangler {
        load_pointer(info, &TypeRegistry::new()).unwrap().into_mangler()
    }

    #[test]
    fn collapse_counts_levels() {
        let (target, count) = collapse(<Option<Box<Arc<u8>>>>::type_info());
        assert!(target.type_is::<u8>());
        assert_eq!(count, 3);
    }

    #[test]
    fn nil_at_any_level() {
        let mangler = pointer_mangler(<Option<Option<u16>>>::type_info());
        assert_eq!(mangler.to_vec(&None::<Option<u16>>), [0x00]);
        assert_eq!(mangler.to_vec(&Some(None::<u16>)), [0x00]);
        assert_eq!(mangler.to_vec(&Some(Some(7_u16))), [0x01, 0x00, 0x07]);
    }

    #[test]
    fn depth_is_transparent() {
        let one = pointer_mangler(<Box<i32>>::type_info());
        let three = pointer_mangler(<Box<Box<Box<i32>>>>::type_info());
        assert_eq!(one.to_vec(&Box::new(5_i32)), [1, 0, 0, 0, 5]);
        assert_eq!(three.to_vec(&Box::new(Box::new(Box::new(5_i32)))), [1, 0, 0, 0, 5]);
    }

    #[test]
    fn array_target_bulk_equals_items() {
        let bulk = pointer_mangler(<Box<[u16; 3]>>::type_info());
        let items = pointer_mangler(<Box<[Box<u16>; 3]>>::type_info());

        let bytes = bulk.to_vec(&Box::new([1_u16, 2, 3]));
        assert_eq!(bytes, [1, 0, 1, 0, 2, 0, 3]);

        let boxed: [Box<u16>; 3] = [Box::new(1), Box::new(2), Box::new(3)];
        let mut expected = vec![1_u8];
        expected.extend([1, 0, 1, 1, 0, 2, 1, 0, 3]);
        assert_eq!(items.to_vec(&Box::new(boxed)), expected);
    }

    #[test]
    fn pointer_to_list() {
        let mangler = pointer_mangler(<Option<Vec<u8>>>::type_info());
        assert_eq!(mangler.to_vec(&None::<Vec<u8>>), [0]);
        assert_eq!(
            mangler.to_vec(&Some(vec![9_u8])),
            [1, 0, 0, 0, 0, 0, 0, 0, 1, 9]
        );
    }
}
