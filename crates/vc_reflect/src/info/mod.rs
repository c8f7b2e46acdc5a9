//! Static type information.
//!
//! - [`TypePath`] and [`Type`]: stable names and identity.
//! - [`Typed`]: access to the `&'static` [`TypeInfo`] of a type.
//! - One info struct per [`ReflectKind`].

pub(crate) mod type_path;

mod array_info;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod primitive_info;
mod type_info;
mod typed;

pub use array_info::ArrayInfo;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use primitive_info::{PrimitiveInfo, PrimitiveKind};
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
