//! Type registry for capability querying without a value.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: A capability supported by a type.
//! - [`FromType`]: Create a `TypeTrait` from a type.
//! - [`TypeMeta`]: A [`TypeInfo`] together with a [`TypeTrait`] table.
//! - [`GetTypeMeta`]: Create a `TypeMeta` from a type.
//! - [`TypeRegistry`]: A container for storing and querying `TypeMeta`s.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] and [`impl_auto_register!`].
//!
//! We use [`inventory`] crate to implement static registration, not all
//! platforms support it. If it is not supported, `auto_register` returns
//! `false` without causing any errors.
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`impl_auto_register!`]: crate::impl_auto_register
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
pub use type_trait::TypeTrait;
