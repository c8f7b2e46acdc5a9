//! Canonical byte encodings of reflected values.
//!
//! A [`Mangler`] appends a deterministic byte string for a value. Equal
//! values of the same type always give equal bytes, and distinct values
//! give distinct bytes, which makes the output usable as a cache or map key.
//!
//! Encoders are resolved once per type from its [`TypeInfo`]:
//!
//! 1. Shortcuts ([`Capabilities`]): [`Mangled`] types, timestamps, URIs and
//!    [`BinaryMarshal`] types.
//! 2. The structural kind: primitives use the [`leaf`] layouts, pointers are
//!    collapsed into an [`Indirection`], arrays, lists and maps are walked
//!    item by item. Map entries are sorted, so the iteration order of the
//!    map never shows in the output.
//!
//! Opaque types without a shortcut cannot be encoded and are reported as
//! [`MangleError::UnsupportedType`].
//!
//! # Examples
//!
//! ```
//! use vc_mangler::ManglerCache;
//!
//! let cache = ManglerCache::new();
//!
//! assert_eq!(cache.to_vec(&5_i32), [0, 0, 0, 5]);
//! assert_eq!(cache.to_vec(&Some(Box::new(5_i32))), [1, 0, 0, 0, 5]);
//! assert_eq!(cache.to_vec(&None::<Box<i32>>), [0]);
//! ```
//!
//! [`TypeInfo`]: vc_reflect::info::TypeInfo
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// alloc paths

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod leaf;

mod cache;
mod capability;
mod error;
mod fast;
mod iter;
mod kind;
mod load;
mod mangler;
mod pointer;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use cache::{ManglerCache, append, global, to_vec, try_append};
pub use capability::{BinaryMarshal, Mangled, TypeTraitBinary, TypeTraitMangled};
pub use error::MangleError;
pub use fast::{Capabilities, load_fast};
pub use iter::{iter_array, iter_map};
pub use load::{load, load_by_id, load_mangler};
pub use mangler::{HandleMangler, Loaded, Mangler};
pub use pointer::{Indirection, collapse};

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;
    use std::thread;

    use vc_reflect::impl_reflect_opaque;
    use vc_reflect::impls::Complex;

    use crate::{
        BinaryMarshal, MangleError, Mangled, ManglerCache, TypeTraitBinary, TypeTraitMangled, leaf,
    };

    struct Point {
        x: i16,
        y: i16,
    }

    impl Mangled for Point {
        fn mangle(&self, buf: &mut Vec<u8>) {
            leaf::append_i16(buf, self.x);
            leaf::append_i16(buf, self.y);
        }
    }

    impl BinaryMarshal for Point {
        fn marshal_binary(&self) -> Vec<u8> {
            vec![0xEE]
        }
    }

    impl_reflect_opaque!(Point(TypeTraitMangled, TypeTraitBinary));

    struct Blob(Vec<u8>);

    impl BinaryMarshal for Blob {
        fn marshal_binary(&self) -> Vec<u8> {
            self.0.clone()
        }
    }

    impl_reflect_opaque!(Blob(TypeTraitBinary));

    struct Plain;

    impl Mangled for Plain {
        fn mangle(&self, buf: &mut Vec<u8>) {
            buf.push(0xAB);
        }
    }

    impl_reflect_opaque!(Plain);

    #[test]
    fn integer_is_big_endian() {
        assert_eq!(ManglerCache::new().to_vec(&5_i32), [0, 0, 0, 5]);
    }

    #[test]
    fn strings_are_prefix_free() {
        let cache = ManglerCache::new();
        let ab = cache.to_vec(&String::from("ab"));
        let abc = cache.to_vec(&String::from("abc"));
        assert!(!abc.starts_with(&ab));
        assert!(!ab.starts_with(&abc));
        assert_eq!(cache.to_vec(&"ab"), ab);
    }

    #[test]
    fn nil_and_present_pointers() {
        let cache = ManglerCache::new();
        assert_eq!(cache.to_vec(&None::<Box<i32>>), [0x00]);
        assert_eq!(cache.to_vec(&Some(Box::new(5_i32))), [0x01, 0, 0, 0, 5]);
        assert_eq!(cache.to_vec(&Arc::new(5_i32)), [0x01, 0, 0, 0, 5]);
    }

    #[test]
    fn pointers_to_strings_and_complex() {
        let cache = ManglerCache::new();

        assert_eq!(cache.to_vec(&None::<String>), [0x00]);
        assert_eq!(
            cache.to_vec(&Some(String::from("ab"))),
            [0x01, b'a', b'b', 0x00, 0x01]
        );
        assert_eq!(cache.to_vec(&Box::new("x")), [0x01, b'x', 0x00, 0x01]);

        let value = Complex::new(1.0_f64, -2.0);
        let mut expected = vec![0x01];
        leaf::append_complex128(&mut expected, value);
        assert_eq!(expected.len(), 17);
        assert_eq!(cache.to_vec(&Some(value)), expected);
        assert_eq!(cache.to_vec(&None::<Complex<f64>>), [0x00]);
    }

    #[test]
    fn lists_are_length_sensitive() {
        let cache = ManglerCache::new();
        let short = cache.to_vec(&vec![1_i32, 2]);
        let long = cache.to_vec(&vec![1_i32, 2, 3]);
        assert_ne!(short, long);
        assert!(!long.starts_with(&short));
        assert_eq!(&short[..8], &2_u64.to_be_bytes());

        let boxed: Box<[i32]> = Box::new([1, 2]);
        assert_eq!(cache.to_vec(&boxed), short);
    }

    #[test]
    fn map_insertion_order_is_invisible() {
        let cache = ManglerCache::new();
        let mut a = HashMap::new();
        let mut b = HashMap::new();
        for i in 0..32_u32 {
            a.insert(i, String::from("v"));
            b.insert(31 - i, String::from("v"));
        }
        assert_eq!(cache.to_vec(&a), cache.to_vec(&b));
    }

    #[test]
    fn plain_type_is_unsupported() {
        struct Opaque;
        impl_reflect_opaque!(Opaque);

        let cache = ManglerCache::new();
        let err = cache.try_append(&mut Vec::new(), &Opaque).unwrap_err();
        assert!(matches!(err, MangleError::UnsupportedType { .. }));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot mangle type")]
    fn append_panics_on_unsupported() {
        struct Opaque;
        impl_reflect_opaque!(Opaque);

        ManglerCache::new().to_vec(&Opaque);
    }

    #[test]
    fn mangled_wins_over_binary() {
        let cache = ManglerCache::new();
        assert_eq!(cache.to_vec(&Point { x: 1, y: -1 }), [0, 1, 0xFF, 0xFF]);
    }

    #[test]
    fn binary_is_length_prefixed() {
        let cache = ManglerCache::new();
        let bytes = cache.to_vec(&Blob(vec![7, 8]));
        assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 2, 7, 8]);
    }

    #[test]
    fn capabilities_reach_nested_types() {
        let cache = ManglerCache::new();
        let points = vec![Some(Point { x: 1, y: 2 }), None];
        let mut expected = Vec::new();
        leaf::append_len(&mut expected, 2);
        expected.extend([1, 0, 1, 0, 2, 0]);
        assert_eq!(cache.to_vec(&points), expected);
    }

    #[test]
    fn late_type_trait_drops_stale_manglers() {
        let cache = ManglerCache::new();
        assert!(cache.try_append(&mut Vec::new(), &Plain).is_err());
        assert!(cache.get::<u8>().is_ok());
        assert_eq!(cache.len(), 1);

        cache.register_type_trait::<Plain, TypeTraitMangled>();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.to_vec(&Plain), [0xAB]);
    }

    #[test]
    fn cache_reuses_manglers() {
        let cache = ManglerCache::new();
        cache.to_vec(&vec![1_u8]);
        cache.to_vec(&vec![2_u8, 3]);
        assert_eq!(cache.len(), 1);
        assert!(cache.get::<Vec<u8>>().is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn dyn_values_need_registration() {
        let cache = ManglerCache::new();
        let value: Option<u8> = Some(4);
        let mut buf = Vec::new();

        let err = cache.try_append_dyn(&mut buf, &value).unwrap_err();
        assert!(matches!(err, MangleError::NullType { .. }));

        cache.register::<Option<u8>>();
        cache.try_append_dyn(&mut buf, &value).unwrap();
        assert_eq!(buf, [1, 4]);
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(ManglerCache::new());
        let expected = cache.to_vec(&vec![String::from("x"), String::from("y")]);
        cache.clear();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.to_vec(&vec![String::from("x"), String::from("y")]))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn global_helpers() {
        let mut buf = Vec::new();
        crate::append(&mut buf, &true);
        crate::try_append(&mut buf, &'A').unwrap();
        assert_eq!(buf, [1, 0, 0, 0, 0x41]);
        assert_eq!(crate::to_vec(&7_u8), [7]);
        assert!(crate::global().len() >= 3);
    }
}
