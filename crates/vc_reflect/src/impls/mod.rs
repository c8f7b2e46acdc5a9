//! Reflection implementations for builtin and foreign types, plus the
//! utilities used to write them.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - primitive: `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`,
//!   `f32`, `f64`, [`Complex<f32>`], [`Complex<f64>`], `String`,
//!   `&'static str`, `Box<str>`
//! - pointer: `Box<T>`, `Arc<T>`, `Option<T>`
//! - array: `[T; N]`
//! - list: `Vec<T>`, `VecDeque<T>`, `Box<[T]>`
//! - map: `BTreeMap<K, V>`, `std::collections::HashMap<K, V, S>`,
//!   `hashbrown::HashMap<K, V, S>`
//! - opaque: `std::time::SystemTime`, `chrono::DateTime<Utc>` ("chrono"
//!   feature), `http::Uri` ("http" feature)
//!
//! User types are reflected as opaque with [`impl_reflect_opaque!`].
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`impl_reflect_opaque!`]: crate::impl_reflect_opaque

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod complex;
mod opaque;

mod alloc;
mod core;
mod native;
mod std;
mod vc_utils;

#[cfg(feature = "chrono")]
mod chrono;
#[cfg(feature = "http")]
mod http;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use complex::Complex;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use vc_reflect::impls::concat;
///
/// assert_eq!(concat(&["Vec", "<", "u8", ">"]), "Vec<u8>");
/// ```
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|s| s.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for s in arr {
        res.push_str(s);
    }
    res
}
