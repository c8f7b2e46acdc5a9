use crate::Reflect;

/// A reflected single level of indirection.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::Pointer;
///
/// let some: Option<u8> = Some(3);
/// let none: Option<u8> = None;
///
/// assert_eq!(some.pointee().unwrap().downcast_ref::<u8>(), Some(&3));
/// assert!(none.pointee().is_none());
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointed-to value, `None` for a nil pointer.
    fn pointee(&self) -> Option<&dyn Reflect>;
}
