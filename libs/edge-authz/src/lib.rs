#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod constants;
pub mod context;
pub mod metadata;
pub mod prelude;
pub mod tenancy;

pub use context::AuthContext;

pub use metadata::{MetadataEncodeError, MetadataFields, encode_metadata, is_authorized};

pub use tenancy::{ENV_WILDCARD, TenancyConfig};
