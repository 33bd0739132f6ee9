//! Convenience re-exports for filter and adapter code.

pub use crate::context::AuthContext;
pub use crate::metadata::{MetadataEncodeError, MetadataFields, encode_metadata, is_authorized};
pub use crate::tenancy::{ENV_WILDCARD, TenancyConfig};
