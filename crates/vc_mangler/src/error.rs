use core::any::TypeId;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure to resolve a [`Mangler`](crate::Mangler) for a type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MangleError {
    /// The type is not registered, no descriptor is available.
    #[error("type {type_id:?} is not registered")]
    NullType { type_id: TypeId },

    /// Neither a fast path nor a kind rule applies to the type.
    ///
    /// For composite types this names the innermost unsupported type.
    #[error("cannot mangle type `{type_path}`")]
    UnsupportedType { type_path: &'static str },

    /// The sample value handed to the resolver is of another type.
    #[error("sample of type `{found}` does not match type `{expected}`")]
    SampleMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
