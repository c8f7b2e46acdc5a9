use ::chrono::{DateTime, Utc};

crate::impl_reflect_opaque!(
    @impl DateTime<Utc>,
    "chrono::DateTime<chrono::Utc>",
    "DateTime<Utc>",
    "chrono";
);
