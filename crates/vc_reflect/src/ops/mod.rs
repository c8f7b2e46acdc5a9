//! Reflection subtraits and the [`ReflectRef`] cast.

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod primitive_ops;

pub use array_ops::{Array, ArrayItemIter};
pub use kind::ReflectRef;
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use pointer_ops::Pointer;
pub use primitive_ops::{Primitive, PrimitiveRef, PrimitiveSlice};
