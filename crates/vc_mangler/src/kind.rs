use vc_reflect::info::{PrimitiveKind, TypeInfo};
use vc_reflect::ops::ReflectRef;
use vc_reflect::registry::TypeRegistry;

use crate::error::MangleError;
use crate::iter::{load_array, load_list, load_map};
use crate::leaf::{self, append_primitive, append_primitive_slice, primitive_of};
use crate::mangler::{HandleMangler, Loaded, Mangler, type_mismatch};
use crate::pointer::load_pointer;

// -----------------------------------------------------------------------------
// Dispatch

/// Resolves an encoder from the structural kind of a type.
pub(crate) fn load_kind(
    info: &'static TypeInfo,
    registry: &TypeRegistry,
) -> Result<Loaded, MangleError> {
    match info {
        TypeInfo::Primitive(primitive) => Ok(leaf::leaf_mangler(primitive.kind()).into()),
        TypeInfo::Pointer(_) => load_pointer(info, registry),
        TypeInfo::Array(array) => load_array(array, registry),
        TypeInfo::List(list) => load_list(list, registry),
        TypeInfo::Map(map) => load_map(map, registry),
        TypeInfo::Opaque(opaque) => Err(MangleError::UnsupportedType {
            type_path: opaque.type_path(),
        }),
    }
}

// -----------------------------------------------------------------------------
// Known primitive containers

/// Single pointer to a primitive, encoded without further lookups.
pub(crate) fn known_ptr(kind: PrimitiveKind, type_path: &'static str) -> Mangler {
    Mangler::new(move |buf, value| {
        let ReflectRef::Pointer(pointer) = value.reflect_ref() else {
            type_mismatch(type_path, value)
        };
        match pointer.pointee() {
            None => buf.push(leaf::NIL),
            Some(target) => {
                buf.push(leaf::PRESENT);
                append_primitive(buf, primitive_of(target, kind));
            }
        }
    })
}

/// Items of a primitive array, without a length.
pub(crate) fn known_array(kind: PrimitiveKind) -> HandleMangler {
    HandleMangler::new(move |buf, handle| {
        let ReflectRef::Array(array) = handle else {
            type_mismatch(kind, handle.as_reflect())
        };
        match array.as_primitive_slice() {
            Some(items) => append_primitive_slice(buf, items),
            None => array
                .iter()
                .for_each(|item| append_primitive(buf, primitive_of(item, kind))),
        }
    })
}

/// Length then items of a primitive list.
pub(crate) fn known_list(kind: PrimitiveKind, type_path: &'static str) -> Mangler {
    Mangler::new(move |buf, value| {
        let ReflectRef::List(list) = value.reflect_ref() else {
            type_mismatch(type_path, value)
        };
        leaf::append_len(buf, list.len());
        match list.as_primitive_slice() {
            Some(items) => append_primitive_slice(buf, items),
            None => list
                .iter()
                .for_each(|item| append_primitive(buf, primitive_of(item, kind))),
        }
    })
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::info::{PrimitiveKind, Typed};
    use vc_reflect::registry::TypeRegistry;

    use super::{known_list, load_kind};
    use crate::error::MangleError;
    use crate::leaf;

    #[test]
    fn primitive_leaf() {
        let registry = TypeRegistry::new();
        let mangler = load_kind(i32::type_info(), &registry).unwrap().into_mangler();
        assert_eq!(mangler.to_vec(&5_i32), [0, 0, 0, 5]);

        let mangler = load_kind(String::type_info(), &registry).unwrap().into_mangler();
        assert_eq!(mangler.to_vec(&String::from("a")), [b'a', 0x00, 0x01]);
    }

    #[test]
    fn list_bulk_and_fallback_agree() {
        let vec = vec![1_u32, 2, 3];
        let mut ring: VecDeque<u32> = VecDeque::with_capacity(3);
        ring.extend([9, 9, 1]);
        ring.drain(..2);
        ring.extend([2, 3]);

        let list = known_list(PrimitiveKind::U32, "list");
        let mut expected = Vec::new();
        leaf::append_len(&mut expected, 3);
        vec.iter().for_each(|v| leaf::append_u32(&mut expected, *v));

        assert_eq!(list.to_vec(&vec), expected);
        assert_eq!(list.to_vec(&ring), expected);
    }

    #[test]
    fn opaque_is_unsupported() {
        let registry = TypeRegistry::new();
        let err = load_kind(std::time::SystemTime::type_info(), &registry).unwrap_err();
        assert_eq!(
            err,
            MangleError::UnsupportedType {
                type_path: "std::time::SystemTime"
            }
        );
    }
}
