use core::fmt;

use crate::Reflect;
use crate::impls::{Complex, NonGenericTypeInfoCell};
use crate::info::{PrimitiveInfo, PrimitiveKind, TypeInfo, TypePath, Typed};
use crate::ops::{Primitive, PrimitiveRef, PrimitiveSlice};
use crate::registry::{GetTypeMeta, TypeMeta};

macro_rules! impl_reflect_primitive {
    ($ty:ty => $kind:ident, $path:expr, $name:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::$kind))
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
                Some(PrimitiveSlice::$kind(items))
            }
        }

        impl Primitive for $ty {
            #[inline]
            fn primitive_ref(&self) -> PrimitiveRef<'_> {
                PrimitiveRef::$kind(*self)
            }
        }

        impl GetTypeMeta for $ty {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }
        }
    };
    ($ty:ident => $kind:ident) => {
        impl_reflect_primitive!($ty => $kind, stringify!($ty), stringify!($ty));
    };
}

impl_reflect_primitive!(bool => Bool);
impl_reflect_primitive!(char => Char);
impl_reflect_primitive!(i8 => I8);
impl_reflect_primitive!(i16 => I16);
impl_reflect_primitive!(i32 => I32);
impl_reflect_primitive!(i64 => I64);
impl_reflect_primitive!(i128 => I128);
impl_reflect_primitive!(isize => Isize);
impl_reflect_primitive!(u8 => U8);
impl_reflect_primitive!(u16 => U16);
impl_reflect_primitive!(u32 => U32);
impl_reflect_primitive!(u64 => U64);
impl_reflect_primitive!(u128 => U128);
impl_reflect_primitive!(usize => Usize);
impl_reflect_primitive!(f32 => F32);
impl_reflect_primitive!(f64 => F64);
impl_reflect_primitive!(
    Complex<f32> => Complex64,
    "vc_reflect::impls::Complex<f32>",
    "Complex<f32>"
);
impl_reflect_primitive!(
    Complex<f64> => Complex128,
    "vc_reflect::impls::Complex<f64>",
    "Complex<f64>"
);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::impls::Complex;
    use crate::info::{PrimitiveKind, Typed};
    use crate::ops::{PrimitiveRef, PrimitiveSlice, ReflectRef};

    #[test]
    fn primitive_infos() {
        let info = <i64>::type_info().as_primitive().unwrap();
        assert_eq!(info.kind(), PrimitiveKind::I64);
        assert_eq!(info.type_path(), "i64");

        let info = <Complex<f64>>::type_info().as_primitive().unwrap();
        assert_eq!(info.kind(), PrimitiveKind::Complex128);
        assert_eq!(info.type_name(), "Complex<f64>");
    }

    #[test]
    fn primitive_view() {
        let value = Complex::new(1.0_f32, -2.0);
        let ReflectRef::Primitive(p) = value.reflect_ref() else {
            panic!("expected a primitive");
        };
        assert_eq!(p.primitive_ref(), PrimitiveRef::Complex64(value));
        assert_eq!(p.primitive_ref().kind(), PrimitiveKind::Complex64);
    }

    #[test]
    fn slice_view() {
        let items = [true, false];
        let view = bool::slice_as_primitive(&items).unwrap();
        assert!(matches!(view, PrimitiveSlice::Bool(&[true, false])));
        assert_eq!(view.len(), 2);
    }
}
