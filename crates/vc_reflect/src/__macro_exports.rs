//! Items used by exported macros, not public API.

#[cfg(feature = "auto_register")]
pub use inventory;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::registry::TypeRegistry;

    /// A static registration submitted by [`impl_auto_register!`](crate::impl_auto_register).
    pub struct AutoRegistration {
        register_fn: fn(&mut TypeRegistry),
    }

    impl AutoRegistration {
        #[inline]
        pub const fn new(register_fn: fn(&mut TypeRegistry)) -> Self {
            Self { register_fn }
        }

        #[inline]
        pub fn register(&self, registry: &mut TypeRegistry) {
            (self.register_fn)(registry);
        }
    }

    inventory::collect!(AutoRegistration);

    /// Registered by this crate, its presence proves that static
    /// registration works on the current platform.
    pub struct __AvailFlag;

    crate::impl_reflect_opaque!(
        @impl __AvailFlag,
        "vc_reflect::__macro_exports::auto_register::__AvailFlag",
        "__AvailFlag",
        "vc_reflect::__macro_exports::auto_register";
    );

    crate::impl_auto_register!(__AvailFlag);
}

/// Submit a type for [`TypeRegistry::auto_register`].
///
/// Expands to nothing when the "auto_register" feature is disabled.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::{impl_auto_register, impl_reflect_opaque};
/// use vc_reflect::registry::TypeRegistry;
///
/// pub struct Ticket(u64);
///
/// impl_reflect_opaque!(Ticket);
/// impl_auto_register!(Ticket);
///
/// let mut registry = TypeRegistry::empty();
/// if registry.auto_register() {
///     assert!(registry.contains(TypeId::of::<Ticket>()));
/// }
/// ```
///
/// [`TypeRegistry::auto_register`]: crate::registry::TypeRegistry::auto_register
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! impl_auto_register {
    ($ty:ty) => {
        const _: () = {
            fn __register(registry: &mut $crate::registry::TypeRegistry) {
                registry.register::<$ty>();
            }

            $crate::__macro_exports::inventory::submit! {
                $crate::__macro_exports::auto_register::AutoRegistration::new(__register)
            }
        };
    };
}

/// Submit a type for [`TypeRegistry::auto_register`].
///
/// Expands to nothing when the "auto_register" feature is disabled.
///
/// [`TypeRegistry::auto_register`]: crate::registry::TypeRegistry::auto_register
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! impl_auto_register {
    ($ty:ty) => {};
}
