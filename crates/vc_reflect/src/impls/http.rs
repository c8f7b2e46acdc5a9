use ::http::Uri;

crate::impl_reflect_opaque!(@impl Uri, "http::Uri", "Uri", "http::uri";);
