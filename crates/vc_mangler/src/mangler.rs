use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Mangler

/// A resolved encoder, appends the canonical bytes of a value to a buffer.
///
/// Cheap to clone and shareable across threads. A `Mangler` only accepts
/// values of the type it was resolved for, other values cause a panic.
///
/// # Examples
///
/// ```
/// use vc_mangler::{Mangler, leaf};
///
/// let mangler = Mangler::new(|buf, _| leaf::append_u8(buf, 7));
/// assert_eq!(mangler.to_vec(&0_u8), [7]);
/// ```
#[derive(Clone)]
pub struct Mangler(Arc<dyn Fn(&mut Vec<u8>, &dyn Reflect) + Send + Sync>);

impl Mangler {
    /// Creates a new [`Mangler`] from a function.
    #[inline]
    pub fn new(f: impl Fn(&mut Vec<u8>, &dyn Reflect) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Wraps a [`HandleMangler`], the handle is built with `reflect_ref` on each call.
    pub fn from_handle(handle: HandleMangler) -> Self {
        Self::new(move |buf, value| handle.mangle(buf, value.reflect_ref()))
    }

    /// Appends the canonical bytes of `value` to `buf`.
    #[inline]
    pub fn mangle(&self, buf: &mut Vec<u8>, value: &dyn Reflect) {
        (self.0)(buf, value);
    }

    /// Returns the canonical bytes of `value`.
    pub fn to_vec(&self, value: &dyn Reflect) -> Vec<u8> {
        let mut buf = Vec::new();
        self.mangle(&mut buf, value);
        buf
    }
}

impl fmt::Debug for Mangler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mangler(..)")
    }
}

// -----------------------------------------------------------------------------
// HandleMangler

/// An encoder working on a [`ReflectRef`] handle.
///
/// Used for container traversal and pointer dereference chains, where the
/// structural view of the value is already at hand.
#[derive(Clone)]
pub struct HandleMangler(Arc<dyn Fn(&mut Vec<u8>, ReflectRef<'_>) + Send + Sync>);

impl HandleMangler {
    /// Creates a new [`HandleMangler`] from a function.
    #[inline]
    pub fn new(f: impl Fn(&mut Vec<u8>, ReflectRef<'_>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Wraps a [`Mangler`], the handle is turned back into a value on each call.
    pub fn from_mangler(mangler: Mangler) -> Self {
        Self::new(move |buf, handle| mangler.mangle(buf, handle.as_reflect()))
    }

    /// Appends the canonical bytes of the value behind `handle` to `buf`.
    #[inline]
    pub fn mangle(&self, buf: &mut Vec<u8>, handle: ReflectRef<'_>) {
        (self.0)(buf, handle);
    }
}

impl fmt::Debug for HandleMangler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HandleMangler(..)")
    }
}

// -----------------------------------------------------------------------------
// Loaded

/// A successful resolution, either form of encoder.
#[derive(Debug, Clone)]
pub enum Loaded {
    Mangler(Mangler),
    Handle(HandleMangler),
}

impl Loaded {
    /// Returns the value form, wrapping a handle encoder if needed.
    pub fn into_mangler(self) -> Mangler {
        match self {
            Self::Mangler(mangler) => mangler,
            Self::Handle(handle) => Mangler::from_handle(handle),
        }
    }

    /// Returns the handle form, wrapping a value encoder if needed.
    pub fn into_handle(self) -> HandleMangler {
        match self {
            Self::Mangler(mangler) => HandleMangler::from_mangler(mangler),
            Self::Handle(handle) => handle,
        }
    }
}

impl From<Mangler> for Loaded {
    #[inline]
    fn from(value: Mangler) -> Self {
        Self::Mangler(value)
    }
}

impl From<HandleMangler> for Loaded {
    #[inline]
    fn from(value: HandleMangler) -> Self {
        Self::Handle(value)
    }
}

// -----------------------------------------------------------------------------
// Contract violation

/// Panics for a value handed to an encoder resolved for another type.
#[cold]
#[inline(never)]
pub(crate) fn type_mismatch(expected: impl fmt::Display, value: &dyn Reflect) -> ! {
    panic!(
        "mangler for `{expected}` called with a value of type `{}`",
        value.reflect_type_path()
    )
}
