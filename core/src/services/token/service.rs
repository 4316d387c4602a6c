//! Main token service implementation

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::value_objects::SecretMaterial;
use crate::errors::{DomainResult, TokenError};

use super::claims_signer::ClaimsSigner;
use super::clock::{Clock, SystemClock};
use super::config::{RefreshExpiryPolicy, TokenServiceConfig};
use super::refresh_encryptor::RefreshEncryptor;

/// Issues, validates and refreshes token pairs
///
/// Holds no per-call state: every method takes `&self` and the service is
/// shared between request handlers behind an `Arc`.
#[derive(Debug)]
pub struct TokenService {
    signer: ClaimsSigner,
    encryptor: RefreshEncryptor,
    config: TokenServiceConfig,
}

impl TokenService {
    /// Creates a token service on the system clock
    pub fn new(secret: &SecretMaterial, config: TokenServiceConfig) -> Self {
        Self::with_clock(secret, config, Arc::new(SystemClock))
    }

    /// Creates a token service reading time from `clock`
    pub fn with_clock(
        secret: &SecretMaterial,
        config: TokenServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        if config.refresh_policy == RefreshExpiryPolicy::SignatureOnly {
            tracing::warn!(
                event = "refresh_policy",
                "Refresh accepts expired access tokens (signature-only policy)"
            );
        }

        Self {
            signer: ClaimsSigner::new(secret, clock),
            encryptor: RefreshEncryptor::new(secret),
            config,
        }
    }

    /// Configured access token lifetime
    pub fn ttl(&self) -> Duration {
        self.config.access_token_ttl
    }

    /// Current time on the clock tokens are validated against
    pub fn now(&self) -> DateTime<Utc> {
        self.signer.now()
    }

    /// Service configuration
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues a new token pair for `subject_id`
    ///
    /// The refresh token is the encrypted access token of the same pair.
    pub fn issue(&self, subject_id: &str) -> DomainResult<TokenPair> {
        let access_token = self.signer.sign(subject_id, self.config.access_token_ttl)?;
        let refresh_token = self.encryptor.wrap(access_token.as_bytes())?;

        tracing::debug!(subject_id = subject_id, event = "token_issued", "Issued token pair");

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Validates an access token and returns its claims
    pub fn validate_access(&self, access_token: &str) -> DomainResult<Claims> {
        self.signer.verify(access_token).map_err(|e| {
            tracing::debug!(error = %e, event = "access_rejected", "Access token rejected");
            e
        })
    }

    /// Checks that `pair` is a genuine, bound pair and returns its subject id
    ///
    /// 1. Decrypts the refresh token
    /// 2. Requires the plaintext to equal `pair.access_token` byte-for-byte
    /// 3. Verifies the recovered access token (expiry per [`RefreshExpiryPolicy`])
    pub fn refresh(&self, pair: &TokenPair) -> DomainResult<String> {
        let recovered = self.encryptor.unwrap(&pair.refresh_token).map_err(|e| {
            tracing::warn!(error = %e, event = "refresh_rejected", "Refresh token rejected");
            e
        })?;

        if !constant_time_eq(&recovered, pair.access_token.as_bytes()) {
            tracing::warn!(
                event = "refresh_rejected",
                "Refresh token does not wrap the presented access token"
            );
            return Err(TokenError::ReferenceMismatch.into());
        }

        // The recovered bytes equal a `&str`, so they are valid UTF-8.
        let access_token = pair.access_token.as_str();
        let claims = match self.config.refresh_policy {
            RefreshExpiryPolicy::Strict => self.signer.verify(access_token),
            RefreshExpiryPolicy::SignatureOnly => self.signer.verify_signature_only(access_token),
        }
        .map_err(|e| {
            tracing::debug!(error = %e, event = "refresh_rejected", "Wrapped access token rejected");
            e
        })?;

        tracing::debug!(
            subject_id = %claims.subject_id,
            event = "token_refreshed",
            "Refresh pair accepted"
        );

        Ok(claims.subject_id)
    }
}
