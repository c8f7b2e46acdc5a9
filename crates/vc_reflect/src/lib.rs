//! Static type information and type erased value handles.
//!
//! - [`info`]: `&'static` [`TypeInfo`](info::TypeInfo) descriptors through
//!   [`Typed`](info::Typed), with stable names from [`TypePath`](info::TypePath).
//! - [`Reflect`] and [`ops`]: `&dyn Reflect` value handles and their
//!   structural views.
//! - [`registry`]: [`TypeRegistry`](registry::TypeRegistry), a table of
//!   type traits (capabilities) by [`TypeId`](core::any::TypeId).
//! - [`impls`]: implementations for builtin types and the helpers to write more.
//!
//! # Examples
//!
//! ```
//! use vc_reflect::Reflect;
//! use vc_reflect::info::{ReflectKind, Typed};
//! use vc_reflect::ops::ReflectRef;
//!
//! let info = <Option<Box<i32>>>::type_info();
//! assert_eq!(info.kind(), ReflectKind::Pointer);
//!
//! let value: Option<Box<i32>> = Some(Box::new(5));
//! let ReflectRef::Pointer(ptr) = value.reflect_ref() else { unreachable!() };
//! assert!(ptr.pointee().unwrap().is::<Box<i32>>());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// alloc paths

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
