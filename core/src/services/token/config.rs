//! Configuration for the token service

use chrono::Duration;

use crate::domain::entities::token::ACCESS_TOKEN_TTL_SECONDS;

/// How `refresh` treats the expiry of the wrapped access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshExpiryPolicy {
    /// The wrapped access token must still be unexpired
    #[default]
    Strict,
    /// Only the wrapped access token's signature is checked
    ///
    /// Lets an expired access token be renewed for as long as its refresh
    /// token is presented alongside it. Opt-in.
    SignatureOnly,
}

impl std::str::FromStr for RefreshExpiryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(RefreshExpiryPolicy::Strict),
            "signature_only" | "signature-only" => Ok(RefreshExpiryPolicy::SignatureOnly),
            _ => Err(format!("Invalid refresh expiry policy: {}", s)),
        }
    }
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh-after-expiry behavior
    pub refresh_policy: RefreshExpiryPolicy,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_token_ttl: Duration::seconds(ACCESS_TOKEN_TTL_SECONDS),
            refresh_policy: RefreshExpiryPolicy::default(),
        }
    }
}

impl TokenServiceConfig {
    /// Set the access token lifetime
    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    /// Set the refresh-after-expiry policy
    pub fn with_refresh_policy(mut self, policy: RefreshExpiryPolicy) -> Self {
        self.refresh_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenServiceConfig::default();
        assert_eq!(config.access_token_ttl, Duration::hours(2));
        assert_eq!(config.refresh_policy, RefreshExpiryPolicy::Strict);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("strict".parse(), Ok(RefreshExpiryPolicy::Strict));
        assert_eq!("Signature_Only".parse(), Ok(RefreshExpiryPolicy::SignatureOnly));
        assert!("lenient".parse::<RefreshExpiryPolicy>().is_err());
    }
}
