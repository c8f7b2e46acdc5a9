use crate::info::Typed;

/// Create a value, usually a [`TypeTrait`], from a type.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{TypePath, Typed};
/// use vc_reflect::registry::FromType;
///
/// struct TypeTraitName(&'static str);
///
/// impl<T: Typed> FromType<T> for TypeTraitName {
///     fn from_type() -> Self {
///         TypeTraitName(T::type_name())
///     }
/// }
///
/// let name = <TypeTraitName as FromType<u8>>::from_type();
/// assert_eq!(name.0, "u8");
/// ```
///
/// [`TypeTrait`]: crate::registry::TypeTrait
pub trait FromType<T: Typed> {
    /// Creates an instance for type `T`.
    fn from_type() -> Self;
}
