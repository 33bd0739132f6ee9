//! Lossless mapping between an [`AuthContext`] and a flat string-keyed
//! metadata record.
//!
//! The record travels across a process boundary — as dynamic metadata
//! between a network filter and its peer, or as headers injected into a
//! proxied request. Encode runs once per completed authorization decision;
//! decode runs once per inbound record on the receiving side and must be
//! its exact inverse under every multitenancy configuration. The
//! organization/environment resolution rules live in [`crate::tenancy`].

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    HEADER_ACCESS_TOKEN, HEADER_API, HEADER_API_PRODUCTS, HEADER_APPLICATION, HEADER_AUTHORIZED,
    HEADER_CLIENT_ID, HEADER_DEVELOPER_EMAIL, HEADER_ENVIRONMENT, HEADER_ORGANIZATION,
    HEADER_SCOPE,
};
use crate::context::AuthContext;
use crate::tenancy::TenancyConfig;

/// Flat string-keyed record carrying an authorization context across a
/// process boundary. Carriers may wrap values in typed envelopes; this
/// codec reads and writes every entry as a plain string.
pub type MetadataFields = Map<String, Value>;

/// Errors raised while building a metadata record.
#[derive(Debug, Error)]
pub enum MetadataEncodeError {
    /// The carrier rejected a field value.
    #[error("serializing metadata key `{key}`")]
    Serialize {
        /// Key whose value was rejected.
        key: String,
        /// Underlying carrier error.
        #[source]
        source: serde_json::Error,
    },
}

fn put(fields: &mut MetadataFields, key: &str, value: &str) -> Result<(), MetadataEncodeError> {
    let value = serde_json::to_value(value).map_err(|source| MetadataEncodeError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    fields.insert(key.to_owned(), value);
    Ok(())
}

/// Encode an authorization decision as a metadata record.
///
/// Without a context the record carries only the API identifier. With a
/// context, every field is written as a plain string; list-valued fields
/// are flattened (`api-products` comma-joined, `scope` space-joined). The
/// `authorized` marker is written with the literal value `"true"` only when
/// `authorized` is `true` — an unauthorized decision leaves the key absent
/// entirely rather than writing `"false"`.
///
/// # Errors
///
/// Returns [`MetadataEncodeError::Serialize`] when the carrier rejects a
/// value. Every value written here is a plain string, so the path is not
/// expected to be taken; it is surfaced to the caller rather than panicking.
pub fn encode_metadata(
    api: &str,
    ctx: Option<&AuthContext>,
    authorized: bool,
) -> Result<MetadataFields, MetadataEncodeError> {
    let mut fields = MetadataFields::new();
    put(&mut fields, HEADER_API, api)?;

    let Some(ctx) = ctx else {
        return Ok(fields);
    };

    put(&mut fields, HEADER_ACCESS_TOKEN, ctx.access_token())?;
    put(&mut fields, HEADER_APPLICATION, ctx.application())?;
    put(&mut fields, HEADER_API_PRODUCTS, &ctx.api_products().join(","))?;
    put(&mut fields, HEADER_CLIENT_ID, ctx.client_id())?;
    put(&mut fields, HEADER_DEVELOPER_EMAIL, ctx.developer_email())?;
    put(&mut fields, HEADER_ENVIRONMENT, ctx.environment())?;
    put(&mut fields, HEADER_ORGANIZATION, ctx.organization())?;
    put(&mut fields, HEADER_SCOPE, &ctx.scopes().join(" "))?;

    if authorized {
        put(&mut fields, HEADER_AUTHORIZED, "true")?;
    }

    Ok(fields)
}

/// Whether a metadata record carries the authorized marker.
///
/// Only the literal string `"true"` counts; an absent or malformed key
/// means the peer did not authorize the request.
#[must_use]
pub fn is_authorized(fields: &MetadataFields) -> bool {
    fields.get(HEADER_AUTHORIZED).and_then(Value::as_str) == Some("true")
}

impl TenancyConfig {
    /// Decode a metadata record into the API identifier and an
    /// [`AuthContext`].
    ///
    /// The API identifier is read at the configured `api_header` key. The
    /// organization is always the configured one; the environment follows
    /// `resolve_for_decode`, fed the raw `environment` field when present.
    ///
    /// Never fails: missing or malformed fields degrade to empty strings
    /// and empty sequences, leaving validity enforcement to the caller. A
    /// consumer handed an all-empty context applies its own deny-by-default
    /// policy.
    #[must_use]
    pub fn decode_metadata(&self, fields: &MetadataFields) -> (String, AuthContext) {
        let api = text(fields, &self.api_header);
        if api.is_empty() {
            debug!(key = %self.api_header, "metadata record carries no API identifier");
        }

        let env_field = fields.get(HEADER_ENVIRONMENT).and_then(Value::as_str);
        if self.multitenant && env_field.is_none() {
            debug!("multitenant metadata record carries no environment field");
        }
        let (organization, environment) = self.resolve_for_decode(env_field);

        let ctx = AuthContext::builder()
            .client_id(text(fields, HEADER_CLIENT_ID))
            .access_token(text(fields, HEADER_ACCESS_TOKEN))
            .application(text(fields, HEADER_APPLICATION))
            .api_products(list(fields, HEADER_API_PRODUCTS, ','))
            .developer_email(text(fields, HEADER_DEVELOPER_EMAIL))
            .scopes(list(fields, HEADER_SCOPE, ' '))
            .resolved(organization, environment)
            .build();

        (api, ctx)
    }
}

fn text(fields: &MetadataFields, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Split a list-valued field. An absent (or non-string) key is an empty
/// sequence, not a sequence containing one empty string.
fn list(fields: &MetadataFields, key: &str, sep: char) -> Vec<String> {
    match fields.get(key).and_then(Value::as_str) {
        Some(joined) => joined.split(sep).map(str::to_owned).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn fields_with(key: &str, value: Value) -> MetadataFields {
        let mut fields = MetadataFields::new();
        fields.insert(key.to_owned(), value);
        fields
    }

    #[test]
    fn text_degrades_missing_and_non_string_values_to_empty() {
        let fields = fields_with(HEADER_CLIENT_ID, Value::from(42));
        assert_eq!(text(&fields, HEADER_CLIENT_ID), "");
        assert_eq!(text(&fields, HEADER_APPLICATION), "");
    }

    #[test]
    fn list_absent_key_is_empty_sequence() {
        let fields = MetadataFields::new();
        assert!(list(&fields, HEADER_API_PRODUCTS, ',').is_empty());
    }

    #[test]
    fn list_splits_on_separator() {
        let fields = fields_with(HEADER_SCOPE, Value::from("scope1 scope2"));
        assert_eq!(list(&fields, HEADER_SCOPE, ' '), &["scope1", "scope2"]);
    }

    #[test]
    fn authorized_marker_requires_literal_true() {
        assert!(is_authorized(&fields_with(
            HEADER_AUTHORIZED,
            Value::from("true")
        )));
        assert!(!is_authorized(&fields_with(
            HEADER_AUTHORIZED,
            Value::from("false")
        )));
        assert!(!is_authorized(&fields_with(
            HEADER_AUTHORIZED,
            Value::from(true)
        )));
        assert!(!is_authorized(&MetadataFields::new()));
    }
}
