use alloc::vec::Vec;

use vc_reflect::info::{ArrayInfo, ListInfo, MapInfo, TypeInfo};
use vc_reflect::ops::ReflectRef;
use vc_reflect::registry::TypeRegistry;

use crate::error::MangleError;
use crate::kind::known_list;
use crate::leaf;
use crate::load::load;
use crate::mangler::{HandleMangler, Loaded, type_mismatch};

// -----------------------------------------------------------------------------
// Iterators

/// Encodes every item with `elem`, in index order.
///
/// Array handles are written without a length, list handles with one.
pub fn iter_array(elem: Loaded) -> HandleMangler {
    let elem = elem.into_mangler();
    HandleMangler::new(move |buf, handle| match handle {
        ReflectRef::Array(array) => array.iter().for_each(|item| elem.mangle(buf, item)),
        ReflectRef::List(list) => {
            leaf::append_len(buf, list.len());
            list.iter().for_each(|item| elem.mangle(buf, item));
        }
        _ => type_mismatch("array or list", handle.as_reflect()),
    })
}

/// Encodes the entries of a map in canonical order.
///
/// Entries are sorted by their encoded key, then by their encoded value,
/// and written after the entry count.
pub fn iter_map(key: Loaded, value: Loaded) -> HandleMangler {
    let key = key.into_mangler();
    let value = value.into_mangler();
    HandleMangler::new(move |buf, handle| {
        let ReflectRef::Map(map) = handle else {
            type_mismatch("map", handle.as_reflect())
        };
        let mut entries: Vec<(Vec<u8>, Vec<u8>)> = map
            .iter()
            .map(|(k, v)| (key.to_vec(k), value.to_vec(v)))
            .collect();
        entries.sort_unstable();

        leaf::append_len(buf, entries.len());
        for (k, v) in entries {
            buf.extend_from_slice(&k);
            buf.extend_from_slice(&v);
        }
    })
}

// -----------------------------------------------------------------------------
// Resolvers

pub(crate) fn load_array(info: &ArrayInfo, registry: &TypeRegistry) -> Result<Loaded, MangleError> {
    let elem = load(info.item_info(), None, registry)?;
    Ok(iter_array(elem).into())
}

pub(crate) fn load_list(info: &ListInfo, registry: &TypeRegistry) -> Result<Loaded, MangleError> {
    match info.item_info() {
        TypeInfo::Primitive(item) => Ok(known_list(item.kind(), info.type_path()).into()),
        item => Ok(iter_array(load(item, None, registry)?).into()),
    }
}

pub(crate) fn load_map(info: &MapInfo, registry: &TypeRegistry) -> Result<Loaded, MangleError> {
    let key = load(info.key_info(), None, registry)?;
    let value = load(info.value_info(), None, registry)?;
    Ok(iter_map(key, value).into())
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use vc_reflect::info::Typed;
    use vc_reflect::registry::TypeRegistry;

    use crate::Mangler;
    use crate::error::MangleError;
    use crate::load::load;

    fn mangler_of(info: &'static vc_reflect::info::TypeInfo) -> Mangler {
        load(info, None, &TypeRegistry::new()).unwrap().into_mangler()
    }

    #[test]
    fn arrays_have_no_length() {
        let mangler = mangler_of(<[String; 2]>::type_info());
        let bytes = mangler.to_vec(&[String::from("a"), String::from("b")]);
        assert_eq!(bytes, [b'a', 0, 1, b'b', 0, 1]);
    }

    #[test]
    fn nested_lists_are_unambiguous() {
        let mangler = mangler_of(<Vec<Vec<u8>>>::type_info());
        let a = mangler.to_vec(&vec![vec![1_u8], vec![2]]);
        let b = mangler.to_vec(&vec![vec![1_u8, 2]]);
        let c = mangler.to_vec(&vec![vec![1_u8, 2], Vec::new()]);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn map_order_is_canonical() {
        let pairs = [(3_u8, "c"), (1, "a"), (2, "b")];
        let hash: HashMap<u8, &'static str> = pairs.into_iter().collect();
        let tree: BTreeMap<u8, &'static str> = pairs.into_iter().collect();

        let from_hash = mangler_of(<HashMap<u8, &'static str>>::type_info()).to_vec(&hash);
        let from_tree = mangler_of(<BTreeMap<u8, &'static str>>::type_info()).to_vec(&tree);
        assert_eq!(from_hash, from_tree);

        let mut expected = vec![0, 0, 0, 0, 0, 0, 0, 3];
        for (k, v) in [(1, b'a'), (2, b'b'), (3, b'c')] {
            expected.extend([k, v, 0, 1]);
        }
        assert_eq!(from_hash, expected);
    }

    #[test]
    fn unsupported_item_names_innermost_type() {
        struct Plain;
        vc_reflect::impl_reflect_opaque!(Plain);

        let err = load(<Vec<Option<Plain>>>::type_info(), None, &TypeRegistry::new()).unwrap_err();
        let MangleError::UnsupportedType { type_path } = err else {
            panic!("unexpected error: {err}");
        };
        assert!(type_path.ends_with("::Plain"));
    }
}
