//! Token entities for the stateless access/refresh protocol.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Default access token lifetime (2 hours)
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 2 * 60 * 60;

/// Claims carried inside a signed access token
///
/// The wire names (`user_id`, `exp`) are what clients already decode, so the
/// Rust field names are mapped onto them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (opaque, typically a user id)
    #[serde(rename = "user_id")]
    pub subject_id: String,

    /// Expiration as a unix timestamp in seconds
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    /// Creates claims for `subject_id` that expire `ttl` after `now`
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn new(subject_id: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expiry = now.checked_add_signed(ttl)?;
        Some(Self {
            subject_id: subject_id.into(),
            expires_at: expiry.timestamp(),
        })
    }

    /// Whether the claims are expired at `now`
    ///
    /// A token whose expiry equals `now` is already expired; there is no
    /// grace window.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now.timestamp()
    }

    /// Expiry as a UTC timestamp, `None` if out of chrono's range
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.expires_at, 0).single()
    }

    /// Seconds remaining until expiry at `now`, clamped at zero
    pub fn seconds_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now.timestamp()).max(0)
    }
}

/// Token pair handed to clients
///
/// The refresh token always wraps the access token of the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Encrypted copy of `access_token`
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_claims_expiry_from_ttl() {
        let claims = Claims::new("user123", at(1_000), Duration::hours(2)).unwrap();

        assert_eq!(claims.subject_id, "user123");
        assert_eq!(claims.expires_at, 1_000 + ACCESS_TOKEN_TTL_SECONDS);
        assert_eq!(claims.expiry(), Some(at(1_000 + ACCESS_TOKEN_TTL_SECONDS)));
    }

    #[test]
    fn test_claims_expired_at_boundary() {
        let claims = Claims::new("user123", at(1_000), Duration::seconds(60)).unwrap();

        assert!(!claims.is_expired_at(at(1_059)));
        assert!(claims.is_expired_at(at(1_060)));
        assert!(claims.is_expired_at(at(1_061)));
    }

    #[test]
    fn test_claims_reject_unrepresentable_expiry() {
        assert!(Claims::new("user123", at(1_000), Duration::seconds(10_000_000_000_000)).is_none());
        assert!(Claims::new("user123", at(1_000), Duration::days(365 * 100)).is_some());
    }

    #[test]
    fn test_seconds_until_expiry_clamps() {
        let claims = Claims::new("user123", at(1_000), Duration::seconds(60)).unwrap();

        assert_eq!(claims.seconds_until_expiry(at(1_000)), 60);
        assert_eq!(claims.seconds_until_expiry(at(2_000)), 0);
    }

    #[test]
    fn test_claims_wire_names() {
        let claims = Claims::new("user123", at(1_000), Duration::seconds(60)).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json, serde_json::json!({ "user_id": "user123", "exp": 1_060 }));
    }

    #[test]
    fn test_token_pair_json_shape() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string());
        let json = serde_json::to_string(&pair).unwrap();

        assert_eq!(json, r#"{"access_token":"access","refresh_token":"refresh"}"#);
        let decoded: TokenPair = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, pair);
    }
}
