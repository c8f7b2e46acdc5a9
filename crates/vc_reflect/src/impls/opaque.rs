/// Reflect a type as opaque and attach type traits to its [`TypeMeta`].
///
/// Implements [`TypePath`], [`Typed`], [`Reflect`] and [`GetTypeMeta`].
/// The type path is `module_path!()` joined with the type ident, and the
/// listed type traits are built through [`FromType`].
///
/// The type must be `Send + Sync + 'static`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{impl_reflect_opaque, Reflect};
/// use vc_reflect::info::{ReflectKind, TypePath, Typed};
/// use vc_reflect::registry::{FromType, TypeRegistry, TypeTrait};
///
/// struct Token(u32);
///
/// struct TypeTraitTag(&'static str);
/// impl TypeTrait for TypeTraitTag {}
/// impl<T: Typed> FromType<T> for TypeTraitTag {
///     fn from_type() -> Self { TypeTraitTag(T::type_name()) }
/// }
///
/// impl_reflect_opaque!(Token(TypeTraitTag));
///
/// assert_eq!(Token(1).reflect_kind(), ReflectKind::Opaque);
/// assert!(Token::type_path().ends_with("::Token"));
///
/// let mut registry = TypeRegistry::empty();
/// registry.register::<Token>();
/// let tag = registry.get_type_trait::<TypeTraitTag>(core::any::TypeId::of::<Token>());
/// assert_eq!(tag.unwrap().0, "Token");
/// ```
///
/// [`TypeMeta`]: crate::registry::TypeMeta
/// [`TypePath`]: crate::info::TypePath
/// [`Typed`]: crate::info::Typed
/// [`Reflect`]: crate::Reflect
/// [`GetTypeMeta`]: crate::registry::GetTypeMeta
/// [`FromType`]: crate::registry::FromType
#[macro_export]
macro_rules! impl_reflect_opaque {
    (@impl $ty:ty, $path:expr, $name:expr, $module:expr; $($type_trait:ty),* $(,)?) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some($module)
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<Self>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }
        }

        impl $crate::registry::GetTypeMeta for $ty {
            fn get_type_meta() -> $crate::registry::TypeMeta {
                #[allow(unused_mut)]
                let mut meta = $crate::registry::TypeMeta::of::<Self>();
                $(
                    meta.insert_trait::<$type_trait>(
                        <$type_trait as $crate::registry::FromType<Self>>::from_type(),
                    );
                )*
                meta
            }
        }
    };
    ($ty:ident $(( $($type_trait:ty),* $(,)? ))?) => {
        $crate::impl_reflect_opaque!(
            @impl $ty,
            ::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty)),
            ::core::stringify!($ty),
            ::core::module_path!();
            $($($type_trait),*)?
        );
    };
}
