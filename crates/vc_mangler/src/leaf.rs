//! Leaf encoders, the fixed byte layouts everything else is built from.
//!
//! | value | layout |
//! |---|---|
//! | `bool` | `0x00` or `0x01` |
//! | `char` | scalar value as `u32`, big-endian |
//! | integers | two's complement, big-endian, `isize`/`usize` widened to 8 bytes |
//! | floats | IEEE-754 bits, big-endian |
//! | complex | real part then imaginary part |
//! | strings | `0x00` escaped as `0x00 0xFF`, terminated by `0x00 0x01` |
//! | lengths | `u64`, big-endian |
//! | time | Unix seconds as `i64` (floored) then nanoseconds as `u32`, big-endian |
//!
//! The string layout keeps byte-wise order and no encoded string is a
//! prefix of another.

use alloc::vec::Vec;
use std::time::{SystemTime, UNIX_EPOCH};

use vc_reflect::Reflect;
use vc_reflect::impls::Complex;
use vc_reflect::info::PrimitiveKind;
use vc_reflect::ops::{PrimitiveRef, PrimitiveSlice, ReflectRef};

use crate::Mangler;
use crate::mangler::type_mismatch;

/// Marker of a nil pointer.
pub const NIL: u8 = 0x00;
/// Marker of a present pointer.
pub const PRESENT: u8 = 0x01;

const STR_ESCAPE: u8 = 0xFF;
const STR_TERMINATOR: u8 = 0x01;

// -----------------------------------------------------------------------------
// Scalars

#[inline]
pub fn append_bool(buf: &mut Vec<u8>, v: bool) {
    buf.push(v as u8);
}

#[inline]
pub fn append_char(buf: &mut Vec<u8>, v: char) {
    append_u32(buf, v as u32);
}

macro_rules! impl_append_int {
    ($($name:ident: $ty:ty),* $(,)?) => {$(
        #[inline]
        pub fn $name(buf: &mut Vec<u8>, v: $ty) {
            buf.extend_from_slice(&v.to_be_bytes());
        }
    )*};
}

impl_append_int!(
    append_i8: i8,
    append_i16: i16,
    append_i32: i32,
    append_i64: i64,
    append_i128: i128,
    append_u8: u8,
    append_u16: u16,
    append_u32: u32,
    append_u64: u64,
    append_u128: u128,
);

/// Widened to 8 bytes on every platform.
#[inline]
pub fn append_isize(buf: &mut Vec<u8>, v: isize) {
    append_i64(buf, v as i64);
}

/// Widened to 8 bytes on every platform.
#[inline]
pub fn append_usize(buf: &mut Vec<u8>, v: usize) {
    append_u64(buf, v as u64);
}

#[inline]
pub fn append_f32(buf: &mut Vec<u8>, v: f32) {
    append_u32(buf, v.to_bits());
}

#[inline]
pub fn append_f64(buf: &mut Vec<u8>, v: f64) {
    append_u64(buf, v.to_bits());
}

#[inline]
pub fn append_complex64(buf: &mut Vec<u8>, v: Complex<f32>) {
    append_f32(buf, v.re);
    append_f32(buf, v.im);
}

#[inline]
pub fn append_complex128(buf: &mut Vec<u8>, v: Complex<f64>) {
    append_f64(buf, v.re);
    append_f64(buf, v.im);
}

// -----------------------------------------------------------------------------
// Variable width

/// Appends a collection length as `u64`.
#[inline]
pub fn append_len(buf: &mut Vec<u8>, len: usize) {
    append_u64(buf, len as u64);
}

/// Appends a length prefixed byte string.
#[inline]
pub fn append_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    append_len(buf, bytes.len());
    buf.extend_from_slice(bytes);
}

/// Appends an escaped and terminated string.
///
/// # Examples
///
/// ```
/// use vc_mangler::leaf::append_str;
///
/// let mut buf = Vec::new();
/// append_str(&mut buf, "a\0");
/// assert_eq!(buf, [b'a', 0x00, 0xFF, 0x00, 0x01]);
/// ```
pub fn append_str(buf: &mut Vec<u8>, s: &str) {
    let mut rest = s.as_bytes();
    buf.reserve(rest.len() + 2);
    while let Some(pos) = rest.iter().position(|&b| b == 0) {
        buf.extend_from_slice(&rest[..=pos]);
        buf.push(STR_ESCAPE);
        rest = &rest[pos + 1..];
    }
    buf.extend_from_slice(rest);
    buf.extend_from_slice(&[0x00, STR_TERMINATOR]);
}

// -----------------------------------------------------------------------------
// Time

/// Appends a timestamp given as floored Unix seconds and sub-second nanos.
#[inline]
pub fn append_time(buf: &mut Vec<u8>, secs: i64, nanos: u32) {
    append_i64(buf, secs);
    append_u32(buf, nanos);
}

pub fn append_system_time(buf: &mut Vec<u8>, time: &SystemTime) {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (
            i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
            after.subsec_nanos(),
        ),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).map_or(i64::MIN, |s| -s);
            match before.subsec_nanos() {
                0 => (secs, 0),
                nanos => (secs.saturating_sub(1), 1_000_000_000 - nanos),
            }
        }
    };
    append_time(buf, secs, nanos);
}

#[cfg(feature = "chrono")]
#[inline]
pub fn append_chrono(buf: &mut Vec<u8>, time: &chrono::DateTime<chrono::Utc>) {
    append_time(buf, time.timestamp(), time.timestamp_subsec_nanos());
}

// -----------------------------------------------------------------------------
// Primitive views

/// Appends any primitive view with its leaf layout.
pub fn append_primitive(buf: &mut Vec<u8>, value: PrimitiveRef<'_>) {
    match value {
        PrimitiveRef::Bool(v) => append_bool(buf, v),
        PrimitiveRef::Char(v) => append_char(buf, v),
        PrimitiveRef::I8(v) => append_i8(buf, v),
        PrimitiveRef::I16(v) => append_i16(buf, v),
        PrimitiveRef::I32(v) => append_i32(buf, v),
        PrimitiveRef::I64(v) => append_i64(buf, v),
        PrimitiveRef::I128(v) => append_i128(buf, v),
        PrimitiveRef::Isize(v) => append_isize(buf, v),
        PrimitiveRef::U8(v) => append_u8(buf, v),
        PrimitiveRef::U16(v) => append_u16(buf, v),
        PrimitiveRef::U32(v) => append_u32(buf, v),
        PrimitiveRef::U64(v) => append_u64(buf, v),
        PrimitiveRef::U128(v) => append_u128(buf, v),
        PrimitiveRef::Usize(v) => append_usize(buf, v),
        PrimitiveRef::F32(v) => append_f32(buf, v),
        PrimitiveRef::F64(v) => append_f64(buf, v),
        PrimitiveRef::Complex64(v) => append_complex64(buf, v),
        PrimitiveRef::Complex128(v) => append_complex128(buf, v),
        PrimitiveRef::Str(v) => append_str(buf, v),
    }
}

/// Appends every item of a contiguous primitive run, without a length.
///
/// The output equals appending the items one by one.
pub fn append_primitive_slice(buf: &mut Vec<u8>, items: PrimitiveSlice<'_>) {
    macro_rules! each {
        ($items:ident, $append:ident) => {
            for v in $items {
                $append(buf, *v);
            }
        };
    }

    if let Some(width) = items.kind().fixed_width() {
        buf.reserve(width * items.len());
    }

    match items {
        PrimitiveSlice::Bool(s) => each!(s, append_bool),
        PrimitiveSlice::Char(s) => each!(s, append_char),
        PrimitiveSlice::I8(s) => each!(s, append_i8),
        PrimitiveSlice::I16(s) => each!(s, append_i16),
        PrimitiveSlice::I32(s) => each!(s, append_i32),
        PrimitiveSlice::I64(s) => each!(s, append_i64),
        PrimitiveSlice::I128(s) => each!(s, append_i128),
        PrimitiveSlice::Isize(s) => each!(s, append_isize),
        PrimitiveSlice::U8(s) => buf.extend_from_slice(s),
        PrimitiveSlice::U16(s) => each!(s, append_u16),
        PrimitiveSlice::U32(s) => each!(s, append_u32),
        PrimitiveSlice::U64(s) => each!(s, append_u64),
        PrimitiveSlice::U128(s) => each!(s, append_u128),
        PrimitiveSlice::Usize(s) => each!(s, append_usize),
        PrimitiveSlice::F32(s) => each!(s, append_f32),
        PrimitiveSlice::F64(s) => each!(s, append_f64),
        PrimitiveSlice::Complex64(s) => each!(s, append_complex64),
        PrimitiveSlice::Complex128(s) => each!(s, append_complex128),
        PrimitiveSlice::String(s) => s.iter().for_each(|v| append_str(buf, v)),
        PrimitiveSlice::Str(s) => s.iter().for_each(|v| append_str(buf, v)),
        PrimitiveSlice::BoxStr(s) => s.iter().for_each(|v| append_str(buf, v)),
    }
}

/// Reads the primitive view of `value`, panics if it is not of `kind`.
pub(crate) fn primitive_of(value: &dyn Reflect, kind: PrimitiveKind) -> PrimitiveRef<'_> {
    if let ReflectRef::Primitive(p) = value.reflect_ref() {
        let view = p.primitive_ref();
        if view.kind() == kind {
            return view;
        }
    }
    type_mismatch(kind, value)
}

/// Returns the leaf encoder of a primitive kind.
pub fn leaf_mangler(kind: PrimitiveKind) -> Mangler {
    Mangler::new(move |buf, value| append_primitive(buf, primitive_of(value, kind)))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::time::Duration;
    use std::time::UNIX_EPOCH;

    use vc_reflect::impls::Complex;
    use vc_reflect::info::PrimitiveKind;
    use vc_reflect::ops::PrimitiveSlice;

    use super::*;

    fn encode(f: impl FnOnce(&mut Vec<u8>)) -> Vec<u8> {
        let mut buf = Vec::new();
        f(&mut buf);
        buf
    }

    #[test]
    fn integers_are_big_endian() {
        assert_eq!(encode(|b| append_i32(b, 5)), [0, 0, 0, 5]);
        assert_eq!(encode(|b| append_i16(b, -2)), [0xFF, 0xFE]);
        assert_eq!(encode(|b| append_usize(b, 1)), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(encode(|b| append_isize(b, -1)), [0xFF; 8]);
        assert_eq!(encode(|b| append_char(b, 'A')), [0, 0, 0, 0x41]);
        assert_eq!(encode(|b| append_bool(b, true)), [1]);
    }

    #[test]
    fn fixed_width_per_kind() {
        let cases = [
            (PrimitiveRef::Bool(false), PrimitiveKind::Bool),
            (PrimitiveRef::I8(-1), PrimitiveKind::I8),
            (PrimitiveRef::U128(u128::MAX), PrimitiveKind::U128),
            (PrimitiveRef::Isize(isize::MIN), PrimitiveKind::Isize),
            (PrimitiveRef::F32(0.5), PrimitiveKind::F32),
            (PrimitiveRef::Complex64(Complex::new(1.0, 2.0)), PrimitiveKind::Complex64),
            (PrimitiveRef::Complex128(Complex::new(1.0, 2.0)), PrimitiveKind::Complex128),
        ];
        for (value, kind) in cases {
            let width = kind.fixed_width().unwrap();
            assert_eq!(encode(|b| append_primitive(b, value)).len(), width, "{kind}");
        }
    }

    #[test]
    fn complex_is_real_then_imaginary() {
        let bytes = encode(|b| append_complex64(b, Complex::new(1.0, -1.0)));
        assert_eq!(&bytes[..4], &1.0_f32.to_bits().to_be_bytes());
        assert_eq!(&bytes[4..], &(-1.0_f32).to_bits().to_be_bytes());
    }

    #[test]
    fn strings_are_prefix_free_and_ordered() {
        let ab = encode(|b| append_str(b, "ab"));
        let abc = encode(|b| append_str(b, "abc"));
        assert!(!abc.starts_with(&ab));
        assert!(!ab.starts_with(&abc));

        let words = ["", "\0", "a", "a\0", "a\0b", "ab", "b"];
        let encoded: Vec<_> = words.iter().map(|w| encode(|b| append_str(b, w))).collect();
        assert!(encoded.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bulk_equals_item_by_item() {
        let items = [1_u16, 0xABCD, 7];
        let bulk = encode(|b| append_primitive_slice(b, PrimitiveSlice::U16(&items)));
        let single = encode(|b| items.iter().for_each(|v| append_u16(b, *v)));
        assert_eq!(bulk, single);

        let words = ["x", "yz"];
        let bulk = encode(|b| append_primitive_slice(b, PrimitiveSlice::Str(&words)));
        let single = encode(|b| words.iter().for_each(|v| append_str(b, v)));
        assert_eq!(bulk, single);
    }

    #[test]
    fn time_before_epoch_is_floored() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        let bytes = encode(|b| append_system_time(b, &before));
        assert_eq!(bytes, encode(|b| append_time(b, -2, 500_000_000)));

        let after = UNIX_EPOCH + Duration::new(3, 7);
        let bytes = encode(|b| append_system_time(b, &after));
        assert_eq!(bytes.len(), 12);
        assert_eq!(bytes, encode(|b| append_time(b, 3, 7)));
    }

    #[test]
    #[should_panic(expected = "mangler for `I32` called with a value of type `u8`")]
    fn leaf_rejects_other_types() {
        leaf_mangler(PrimitiveKind::I32).to_vec(&1_u8);
    }
}
