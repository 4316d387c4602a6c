//! Authentication configuration: root secret and token lifetimes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default access token lifetime in seconds (2 hours)
pub const DEFAULT_ACCESS_TOKEN_TTL: i64 = 7200;

/// Token engine configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Root secret every token key is derived from
    #[serde(skip_serializing, default)]
    pub root_secret: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl: i64,

    /// Refresh-after-expiry policy: `strict` or `signature_only`
    #[serde(default = "default_refresh_policy")]
    pub refresh_policy: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            root_secret: String::new(),
            access_token_ttl: default_access_token_ttl(),
            refresh_policy: default_refresh_policy(),
        }
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.has_secret() { "[REDACTED]" } else { "<unset>" };
        f.debug_struct("TokenConfig")
            .field("root_secret", &secret)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_policy", &self.refresh_policy)
            .finish()
    }
}

impl TokenConfig {
    /// Create a new token configuration with a root secret
    pub fn new(root_secret: impl Into<String>) -> Self {
        Self {
            root_secret: root_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token lifetime in seconds
    pub fn with_access_ttl_seconds(mut self, seconds: i64) -> Self {
        self.access_token_ttl = seconds;
        self
    }

    /// Set the refresh-after-expiry policy
    pub fn with_refresh_policy(mut self, policy: impl Into<String>) -> Self {
        self.refresh_policy = policy.into();
        self
    }

    /// Whether a non-blank root secret is configured
    pub fn has_secret(&self) -> bool {
        !self.root_secret.trim().is_empty()
    }

    /// Create from `SECRET_KEY`, `ACCESS_TOKEN_TTL_SECONDS` and `REFRESH_EXPIRY_POLICY`
    ///
    /// A missing `SECRET_KEY` leaves the secret empty; the token engine
    /// refuses to start with it.
    pub fn from_env() -> Self {
        Self {
            root_secret: std::env::var("SECRET_KEY").unwrap_or_default(),
            access_token_ttl: std::env::var("ACCESS_TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|ttl| ttl.parse().ok())
                .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL),
            refresh_policy: std::env::var("REFRESH_EXPIRY_POLICY")
                .unwrap_or_else(|_| default_refresh_policy()),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Token engine configuration
    pub token: TokenConfig,

    /// JSON file seeding the in-memory subject directory
    #[serde(default)]
    pub subject_directory: Option<PathBuf>,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            token: TokenConfig::from_env(),
            subject_directory: std::env::var("SUBJECT_DIRECTORY_PATH").ok().map(PathBuf::from),
        }
    }
}

fn default_access_token_ttl() -> i64 {
    DEFAULT_ACCESS_TOKEN_TTL
}

fn default_refresh_policy() -> String {
    String::from("strict")
}
