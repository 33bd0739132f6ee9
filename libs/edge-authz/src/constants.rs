//! Metadata key names shared by the encoder and decoder.
//!
//! Keys are exact, case-sensitive literals. Every key except [`HEADER_API`]
//! is fixed; the API identifier key is configurable per process via
//! `TenancyConfig::api_header` and merely defaults to [`HEADER_API`].

/// Default key carrying the API identifier.
pub const HEADER_API: &str = "api";

/// Bearer token material of the caller.
pub const HEADER_ACCESS_TOKEN: &str = "access-token";

/// Registered application name.
pub const HEADER_APPLICATION: &str = "application";

/// API product entitlements, comma-joined.
pub const HEADER_API_PRODUCTS: &str = "api-products";

/// Opaque client identifier.
pub const HEADER_CLIENT_ID: &str = "client-id";

/// Developer contact email.
pub const HEADER_DEVELOPER_EMAIL: &str = "developer-email";

/// Resolved environment name.
pub const HEADER_ENVIRONMENT: &str = "environment";

/// Resolved organization name.
pub const HEADER_ORGANIZATION: &str = "organization";

/// OAuth scope tokens, space-joined.
pub const HEADER_SCOPE: &str = "scope";

/// Marker set to `"true"` only for requests that passed authorization.
pub const HEADER_AUTHORIZED: &str = "authorized";
