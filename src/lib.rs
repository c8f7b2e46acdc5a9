#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_mangler as mangler;
pub use vc_reflect as reflect;
pub use vc_utils as utils;

pub use vc_mangler::{Mangled, MangleError, Mangler, ManglerCache, append, to_vec, try_append};
