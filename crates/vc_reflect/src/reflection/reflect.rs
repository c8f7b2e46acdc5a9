use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{PrimitiveSlice, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of runtime reflection in [`vc_reflect`].
///
/// A `&dyn Reflect` is a type erased value handle. Its structure is
/// inspected through [`reflect_ref`], which casts the value to one of the
/// reflection subtraits ([`Primitive`], [`Pointer`], [`Array`], [`List`],
/// [`Map`]) or reports it as opaque.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the container's type ID,
/// use [`Reflect::ty_id`] instead:
///
/// ```
/// use core::any::{Any, TypeId};
/// use vc_reflect::Reflect;
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// assert_eq!(x.downcast_ref::<i32>(), Some(&32));
/// ```
///
/// # Type Casting
///
/// ```
/// use vc_reflect::{Reflect, ops::ReflectRef};
///
/// let v = vec![1_u8, 2, 3];
/// let ReflectRef::List(list) = v.reflect_ref() else { unreachable!() };
/// assert_eq!(list.len(), 3);
/// ```
///
/// [`vc_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`Primitive`]: crate::ops::Primitive
/// [`Pointer`]: crate::ops::Pointer
/// [`Array`]: crate::ops::Array
/// [`List`]: crate::ops::List
/// [`Map`]: crate::ops::Map
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline(always)]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the structural kind of the value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of "kinds" of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Debug formatter for the value.
    ///
    /// Default implementation prints the type path.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }

    /// Returns a contiguous primitive view of a slice of `Self`.
    ///
    /// Only primitive types with a matching [`PrimitiveSlice`] variant return
    /// `Some`, containers use it to offer bulk views of their items.
    #[inline]
    fn slice_as_primitive(items: &[Self]) -> Option<PrimitiveSlice<'_>>
    where
        Self: Sized,
    {
        let _ = items;
        None
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// impl_reflect_cast_fn

/// Implement `reflect_kind` and `reflect_ref` for a reflection kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
