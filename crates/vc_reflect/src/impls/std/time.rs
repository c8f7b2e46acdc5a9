use std::time::SystemTime;

crate::impl_reflect_opaque!(@impl SystemTime, "std::time::SystemTime", "SystemTime", "std::time";);
