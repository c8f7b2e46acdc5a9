use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{PrimitiveInfo, PrimitiveKind, TypeInfo, TypePath, Typed};
use crate::ops::{Primitive, PrimitiveRef, PrimitiveSlice};
use crate::registry::{GetTypeMeta, TypeMeta};

macro_rules! impl_reflect_str {
    ($ty:ty, $slice:ident, $path:literal, $name:literal, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::String))
                })
            }
        }

        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Primitive);

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }

            #[inline]
            fn slice_as_primitive(items: &[Self]) -> Option<PrimitiveSlice<'_>> {
                Some(PrimitiveSlice::$slice(items))
            }
        }

        impl Primitive for $ty {
            #[inline]
            fn primitive_ref(&self) -> PrimitiveRef<'_> {
                PrimitiveRef::Str(self)
            }
        }

        impl GetTypeMeta for $ty {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }
        }
    };
}

impl_reflect_str!(String, String, "alloc::string::String", "String", Some("alloc::string"));
impl_reflect_str!(&'static str, Str, "&str", "&str", None);
impl_reflect_str!(Box<str>, BoxStr, "alloc::boxed::Box<str>", "Box<str>", Some("alloc::boxed"));

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::info::{PrimitiveKind, Typed};
    use crate::ops::{Primitive, PrimitiveRef};

    #[test]
    fn every_string_views_as_str() {
        let owned = String::from("ab");
        let boxed: Box<str> = Box::from("ab");
        assert_eq!(owned.primitive_ref(), PrimitiveRef::Str("ab"));
        assert_eq!(boxed.primitive_ref(), PrimitiveRef::Str("ab"));
        assert_eq!("ab".primitive_ref(), PrimitiveRef::Str("ab"));

        for info in [String::type_info(), <&str>::type_info(), <Box<str>>::type_info()] {
            assert_eq!(info.as_primitive().unwrap().kind(), PrimitiveKind::String);
        }
    }
}
