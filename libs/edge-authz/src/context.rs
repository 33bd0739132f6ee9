use serde::{Deserialize, Serialize};

use crate::tenancy::TenancyConfig;

/// `AuthContext` carries the outcome of validating a caller's credentials
/// and entitlements against the API management control plane.
///
/// Built by the authentication component once per authorization decision
/// and passed through the request lifecycle. The organization and
/// environment are resolved once at construction time and stored as plain
/// immutable fields — the per-request context keeps no reference back to
/// process-lifetime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Opaque client identifier of the caller.
    client_id: String,
    /// Opaque bearer token material.
    access_token: String,
    /// Registered application name.
    application: String,
    /// API product entitlements. Duplicates and order are preserved within
    /// a single encode/decode round trip.
    #[serde(default)]
    api_products: Vec<String>,
    /// Developer contact email.
    developer_email: String,
    /// OAuth-style scope tokens.
    #[serde(default)]
    scopes: Vec<String>,
    /// Resolved organization — always the process-level organization.
    organization: String,
    /// Resolved environment.
    environment: String,
}

impl AuthContext {
    /// Create a new `AuthContext` builder.
    #[must_use]
    pub fn builder() -> AuthContextBuilder {
        AuthContextBuilder::default()
    }

    /// Get the opaque client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get the bearer token material.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the registered application name.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Get the API product entitlements.
    #[must_use]
    pub fn api_products(&self) -> &[String] {
        &self.api_products
    }

    /// Get the developer contact email.
    #[must_use]
    pub fn developer_email(&self) -> &str {
        &self.developer_email
    }

    /// Get the OAuth scope tokens.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Get the resolved organization.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Get the resolved environment.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }
}

#[derive(Default)]
pub struct AuthContextBuilder {
    client_id: String,
    access_token: String,
    application: String,
    api_products: Vec<String>,
    developer_email: String,
    scopes: Vec<String>,
    organization: String,
    environment: String,
}

impl AuthContextBuilder {
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    #[must_use]
    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    #[must_use]
    pub fn api_products(mut self, api_products: Vec<String>) -> Self {
        self.api_products = api_products;
        self
    }

    #[must_use]
    pub fn developer_email(mut self, developer_email: impl Into<String>) -> Self {
        self.developer_email = developer_email.into();
        self
    }

    #[must_use]
    pub fn scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Resolve and store the (organization, environment) pair for this
    /// context. `override_env` is the per-request environment of a
    /// multitenant deployment; pass `None` when the configured environment
    /// applies.
    #[must_use]
    pub fn tenancy(mut self, config: &TenancyConfig, override_env: Option<&str>) -> Self {
        let (organization, environment) = config.resolve_for_encode(override_env);
        self.organization = organization;
        self.environment = environment;
        self
    }

    /// Store an already-resolved pair. Decoding uses this with the result
    /// of `TenancyConfig::resolve_for_decode`.
    #[must_use]
    pub(crate) fn resolved(mut self, organization: String, environment: String) -> Self {
        self.organization = organization;
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn build(self) -> AuthContext {
        AuthContext {
            client_id: self.client_id,
            access_token: self.access_token,
            application: self.application,
            api_products: self.api_products,
            developer_email: self.developer_email,
            scopes: self.scopes,
            organization: self.organization,
            environment: self.environment,
        }
    }
}
