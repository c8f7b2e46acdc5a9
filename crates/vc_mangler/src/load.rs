use core::any::TypeId;

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;
use vc_reflect::registry::TypeRegistry;

use crate::error::MangleError;
use crate::fast::load_fast;
use crate::kind::load_kind;
use crate::mangler::{Loaded, Mangler};

/// Resolves an encoder for a type.
///
/// Shortcuts from [`Capabilities`](crate::Capabilities) are tried first,
/// then the structural kind decides. Errors of nested types are returned
/// as is, so an [`UnsupportedType`] names the innermost offending type.
///
/// If `sample` is given it must be a value of the described type.
///
/// [`UnsupportedType`]: MangleError::UnsupportedType
pub fn load(
    info: &'static TypeInfo,
    sample: Option<&dyn Reflect>,
    registry: &TypeRegistry,
) -> Result<Loaded, MangleError> {
    if let Some(sample) = sample
        && sample.ty_id() != info.type_id()
    {
        return Err(MangleError::SampleMismatch {
            expected: info.type_path(),
            found: sample.reflect_type_path(),
        });
    }

    if let Some(mangler) = load_fast(info, registry) {
        return Ok(mangler.into());
    }
    load_kind(info, registry)
}

/// Same as [`load`], with the type looked up in `registry`.
pub fn load_by_id(
    type_id: TypeId,
    sample: Option<&dyn Reflect>,
    registry: &TypeRegistry,
) -> Result<Loaded, MangleError> {
    let info = registry
        .get_type_info(type_id)
        .ok_or(MangleError::NullType { type_id })?;
    load(info, sample, registry)
}

/// Resolves the value encoder of a type.
///
/// # Examples
///
/// ```
/// use vc_mangler::load_mangler;
/// use vc_reflect::info::Typed;
/// use vc_reflect::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
/// let mangler = load_mangler(<Option<u16>>::type_info(), None, &registry).unwrap();
///
/// assert_eq!(mangler.to_vec(&Some(2_u16)), [1, 0, 2]);
/// assert_eq!(mangler.to_vec(&None::<u16>), [0]);
/// ```
pub fn load_mangler(
    info: &'static TypeInfo,
    sample: Option<&dyn Reflect>,
    registry: &TypeRegistry,
) -> Result<Mangler, MangleError> {
    let loaded = load(info, sample, registry)?;
    log::debug!(
        "resolved {} mangler for `{}`",
        match loaded {
            Loaded::Mangler(_) => "value",
            Loaded::Handle(_) => "handle",
        },
        info.type_path(),
    );
    Ok(loaded.into_mangler())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::any::TypeId;

    use vc_reflect::info::Typed;
    use vc_reflect::registry::TypeRegistry;

    use super::{load, load_by_id};
    use crate::error::MangleError;

    #[test]
    fn unregistered_type_is_null() {
        let registry = TypeRegistry::empty();
        let err = load_by_id(TypeId::of::<u8>(), None, &registry).unwrap_err();
        assert_eq!(err, MangleError::NullType { type_id: TypeId::of::<u8>() });
    }

    #[test]
    fn sample_must_match() {
        let registry = TypeRegistry::new();
        let err = load(u32::type_info(), Some(&String::new()), &registry).unwrap_err();
        assert_eq!(
            err,
            MangleError::SampleMismatch {
                expected: "u32",
                found: "alloc::string::String",
            }
        );
        assert!(load(u32::type_info(), Some(&1_u32), &registry).is_ok());
    }
}
