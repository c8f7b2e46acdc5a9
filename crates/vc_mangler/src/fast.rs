use core::any::TypeId;
use std::time::SystemTime;

use bitflags::bitflags;
use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;
use vc_reflect::ops::ReflectRef;
use vc_reflect::registry::TypeRegistry;

use crate::capability::{TypeTraitBinary, TypeTraitMangled};
use crate::leaf;
use crate::mangler::{Mangler, type_mismatch};

// -----------------------------------------------------------------------------
// Capabilities

bitflags! {
    /// Shortcuts available to a type, checked before its structural kind.
    ///
    /// When several flags are set the first in declaration order wins.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Registered [`TypeTraitMangled`].
        const MANGLED  = 1 << 0;
        /// `SystemTime` or `chrono::DateTime<Utc>`.
        const TIME     = 1 << 1;
        /// Single level pointer to a time type.
        const TIME_PTR = 1 << 2;
        /// `http::Uri`.
        const URL      = 1 << 3;
        /// Registered [`TypeTraitBinary`].
        const BINARY   = 1 << 4;
    }
}

impl Capabilities {
    /// Collects the capabilities of a type.
    pub fn of(info: &TypeInfo, registry: &TypeRegistry) -> Self {
        let mut caps = Self::empty();
        if let Some(meta) = registry.get(info.type_id()) {
            caps.set(Self::MANGLED, meta.has_trait::<TypeTraitMangled>());
            caps.set(Self::BINARY, meta.has_trait::<TypeTraitBinary>());
        }
        caps.set(Self::TIME, is_time(info.type_id()));
        if let Ok(pointer) = info.as_pointer() {
            caps.set(Self::TIME_PTR, is_time(pointer.pointee_id()));
        }
        caps.set(Self::URL, is_url(info.type_id()));
        caps
    }
}

fn is_time(type_id: TypeId) -> bool {
    #[cfg(feature = "chrono")]
    if type_id == TypeId::of::<chrono::DateTime<chrono::Utc>>() {
        return true;
    }
    type_id == TypeId::of::<SystemTime>()
}

fn is_url(type_id: TypeId) -> bool {
    #[cfg(feature = "http")]
    if type_id == TypeId::of::<http::Uri>() {
        return true;
    }
    let _ = type_id;
    false
}

// -----------------------------------------------------------------------------
// Fast encoders

/// Returns the shortcut encoder of a type, if any.
pub fn load_fast(info: &TypeInfo, registry: &TypeRegistry) -> Option<Mangler> {
    let caps = Capabilities::of(info, registry);
    let type_id = info.type_id();

    let (name, mangler) = if caps.contains(Capabilities::MANGLED) {
        let tt = *registry.get_type_trait::<TypeTraitMangled>(type_id)?;
        ("mangled", Mangler::new(move |buf, value| tt.mangle(value, buf)))
    } else if caps.contains(Capabilities::TIME) {
        ("time", time_mangler(type_id)?)
    } else if caps.contains(Capabilities::TIME_PTR) {
        let pointer = info.as_pointer().ok()?;
        let inner = time_mangler(pointer.pointee_id())?;
        let path = info.type_path();
        let mangler = Mangler::new(move |buf, value| match value.reflect_ref() {
            ReflectRef::Pointer(p) => match p.pointee() {
                None => buf.push(leaf::NIL),
                Some(time) => {
                    buf.push(leaf::PRESENT);
                    inner.mangle(buf, time);
                }
            },
            _ => type_mismatch(path, value),
        });
        ("time pointer", mangler)
    } else if caps.contains(Capabilities::URL) {
        ("url", url_mangler()?)
    } else if caps.contains(Capabilities::BINARY) {
        let tt = *registry.get_type_trait::<TypeTraitBinary>(type_id)?;
        let mangler = Mangler::new(move |buf, value| leaf::append_bytes(buf, &tt.marshal(value)));
        ("binary", mangler)
    } else {
        return None;
    };

    log::trace!("fast path `{name}` for `{}`", info.type_path());
    Some(mangler)
}

fn time_mangler(type_id: TypeId) -> Option<Mangler> {
    #[cfg(feature = "chrono")]
    if type_id == TypeId::of::<chrono::DateTime<chrono::Utc>>() {
        return Some(Mangler::new(|buf, value: &dyn Reflect| {
            match value.downcast_ref::<chrono::DateTime<chrono::Utc>>() {
                Some(time) => leaf::append_chrono(buf, time),
                None => type_mismatch("chrono::DateTime<chrono::Utc>", value),
            }
        }));
    }
    if type_id == TypeId::of::<SystemTime>() {
        return Some(Mangler::new(|buf, value: &dyn Reflect| {
            match value.downcast_ref::<SystemTime>() {
                Some(time) => leaf::append_system_time(buf, time),
                None => type_mismatch("std::time::SystemTime", value),
            }
        }));
    }
    None
}

#[cfg(feature = "http")]
fn url_mangler() -> Option<Mangler> {
    use alloc::string::ToString;

    Some(Mangler::new(|buf, value: &dyn Reflect| {
        match value.downcast_ref::<http::Uri>() {
            Some(uri) => leaf::append_str(buf, &uri.to_string()),
            None => type_mismatch("http::Uri", value),
        }
    }))
}

#[cfg(not(feature = "http"))]
#[inline(always)]
fn url_mangler() -> Option<Mangler> {
    None
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;
    use core::time::Duration;
    use std::time::{SystemTime, UNIX_EPOCH};

    use vc_reflect::info::Typed;
    use vc_reflect::registry::TypeRegistry;

    use super::{Capabilities, load_fast};
    use crate::leaf;

    #[test]
    fn time_capabilities() {
        let registry = TypeRegistry::new();
        let caps = Capabilities::of(SystemTime::type_info(), &registry);
        assert_eq!(caps, Capabilities::TIME);

        let caps = Capabilities::of(<Option<SystemTime>>::type_info(), &registry);
        assert_eq!(caps, Capabilities::TIME_PTR);

        let caps = Capabilities::of(<Box<Box<SystemTime>>>::type_info(), &registry);
        assert!(caps.is_empty());

        assert!(load_fast(u32::type_info(), &registry).is_none());
    }

    #[test]
    fn time_pointer_sentinel() {
        let registry = TypeRegistry::new();
        let mangler = load_fast(<Option<SystemTime>>::type_info(), &registry).unwrap();
        let time = UNIX_EPOCH + Duration::new(9, 1);

        assert_eq!(mangler.to_vec(&None::<SystemTime>), [leaf::NIL]);

        let mut expected = Vec::from([leaf::PRESENT]);
        leaf::append_time(&mut expected, 9, 1);
        assert_eq!(mangler.to_vec(&Some(time)), expected);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_matches_system_time() {
        use chrono::{DateTime, Utc};

        let registry = TypeRegistry::new();
        let system = UNIX_EPOCH - Duration::from_millis(250);
        let chrono: DateTime<Utc> = system.into();

        let a = load_fast(SystemTime::type_info(), &registry).unwrap();
        let b = load_fast(<DateTime<Utc>>::type_info(), &registry).unwrap();
        assert_eq!(a.to_vec(&system), b.to_vec(&chrono));
    }

    #[cfg(feature = "http")]
    #[test]
    fn url_uses_string_form() {
        let registry = TypeRegistry::new();
        let uri: http::Uri = "https://example.org/a?b=c".parse().unwrap();
        let caps = Capabilities::of(<http::Uri>::type_info(), &registry);
        assert_eq!(caps, Capabilities::URL);

        let mut expected = Vec::new();
        leaf::append_str(&mut expected, "https://example.org/a?b=c");
        let mangler = load_fast(<http::Uri>::type_info(), &registry).unwrap();
        assert_eq!(mangler.to_vec(&uri), expected);
    }
}
