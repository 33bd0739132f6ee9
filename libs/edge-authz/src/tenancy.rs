//! Process-level tenancy configuration and organization/environment
//! resolution.
//!
//! A process instance serves exactly one organization. The environment is
//! either fixed at startup or, in a multitenant deployment, determined per
//! request. The environment is the only tenancy dimension carried on the
//! wire; the organization always comes from the local configuration.

use serde::{Deserialize, Serialize};

use crate::constants::HEADER_API;

/// Sentinel for [`TenancyConfig::env_name`] meaning the environment is not
/// fixed at the process level.
pub const ENV_WILDCARD: &str = "*";

/// Process-level tenancy configuration.
///
/// Initialized once at startup and read-only for the lifetime of the
/// process. Determines how the (organization, environment) pair is resolved
/// when authorization metadata is encoded and decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenancyConfig {
    /// Organization served by this process instance.
    pub org_name: String,
    /// Configured environment name, or [`ENV_WILDCARD`] when the
    /// environment is not fixed at the process level.
    #[serde(default = "default_env_name")]
    pub env_name: String,
    /// Whether the environment is determined per request.
    #[serde(default)]
    pub multitenant: bool,
    /// Metadata key under which the API identifier is carried.
    #[serde(default = "default_api_header")]
    pub api_header: String,
}

impl Default for TenancyConfig {
    fn default() -> Self {
        Self {
            org_name: String::new(),
            env_name: default_env_name(),
            multitenant: false,
            api_header: default_api_header(),
        }
    }
}

fn default_env_name() -> String {
    ENV_WILDCARD.to_owned()
}

fn default_api_header() -> String {
    HEADER_API.to_owned()
}

impl TenancyConfig {
    /// Resolve the (organization, environment) pair to encode.
    ///
    /// The organization is always `org_name`. The environment is the
    /// per-request override when one is given (multitenant context
    /// instance), otherwise the configured `env_name` — which may be a
    /// fixed name or [`ENV_WILDCARD`].
    #[must_use]
    pub fn resolve_for_encode(&self, override_env: Option<&str>) -> (String, String) {
        let env = override_env.unwrap_or(&self.env_name);
        (self.org_name.clone(), env.to_owned())
    }

    /// Resolve the (organization, environment) pair from decoded fields.
    ///
    /// The organization is always `org_name`, never the record. Under
    /// multitenancy an absent environment field resolves to the empty
    /// string — "unspecified", not "inherit the wildcard" — so traffic is
    /// never attributed to a process default that cannot be correct for a
    /// per-request environment. Single-tenant deployments fall back to the
    /// configured `env_name`, which truly is fixed.
    ///
    /// Never errors; unresolvable inputs produce empty strings and the
    /// caller decides whether that is a policy violation.
    #[must_use]
    pub fn resolve_for_decode(&self, env_field: Option<&str>) -> (String, String) {
        let env = match env_field {
            Some(env) => env.to_owned(),
            None if self.multitenant => String::new(),
            None => self.env_name.clone(),
        };
        (self.org_name.clone(), env)
    }
}
