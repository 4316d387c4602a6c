//! HMAC-SHA256 signing and verification of access token claims

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::SecretMaterial;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::clock::Clock;

/// Signing algorithm for access tokens
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Number of `.`-separated segments in an access token
const TOKEN_SEGMENTS: usize = 3;

/// Creates and verifies compact signed claim sets
pub struct ClaimsSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ClaimsSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimsSigner")
            .field("algorithm", &SIGNING_ALGORITHM)
            .finish()
    }
}

impl ClaimsSigner {
    /// Creates a signer keyed with the root secret
    pub fn new(secret: &SecretMaterial, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.signing_key());
        let decoding_key = DecodingKey::from_secret(secret.signing_key());

        // Expiry is checked here against the injected clock, strictly and
        // without leeway, so jsonwebtoken only handles shape and signature.
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Current time on the signer's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Signs claims for `subject_id` expiring `ttl` from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `header.payload.signature`, each segment base64url
    /// * `Err(DomainError::Internal)` - Expiry out of range, or the claims could not be serialized
    pub fn sign(&self, subject_id: &str, ttl: Duration) -> DomainResult<String> {
        let claims = Claims::new(subject_id, self.clock.now(), ttl).ok_or_else(|| {
            DomainError::Internal {
                message: format!("Token expiry overflows with a ttl of {}s", ttl.num_seconds()),
            }
        })?;

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to sign claims: {}", e),
            }
        })
    }

    /// Verifies a token's shape, signature and expiry
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The embedded claims
    /// * `Err(TokenError::Malformed)` - Not three decodable segments
    /// * `Err(TokenError::SignatureMismatch)` - Header or payload were altered, or signed with another secret
    /// * `Err(TokenError::Expired)` - `expires_at <= now`
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.verify_signature_only(token)?;

        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired.into());
        }

        Ok(claims)
    }

    /// Verifies shape and signature but not expiry
    pub fn verify_signature_only(&self, token: &str) -> DomainResult<Claims> {
        if token.split('.').count() != TOKEN_SEGMENTS {
            return Err(TokenError::Malformed.into());
        }

        // jsonwebtoken recomputes the HMAC and compares it in constant time
        // before it touches the payload.
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let kind = match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                    _ => TokenError::Malformed,
                };
                DomainError::Token(kind)
            })
    }
}
