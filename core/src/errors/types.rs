//! Token-related error types
//!
//! Every per-call failure of the token engine maps to exactly one of these
//! variants. Callers at the HTTP boundary must collapse all of them into a
//! single unauthorized response and only log the specific kind.

use thiserror::Error;

/// Token validation and refresh failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    SignatureMismatch,

    #[error("Token expired")]
    Expired,

    #[error("Refresh token decryption failed")]
    DecryptionFailed,

    #[error("Refresh token does not wrap the supplied access token")]
    ReferenceMismatch,
}

impl TokenError {
    /// Stable machine-readable code, used for internal logging
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Malformed => "TOKEN_MALFORMED",
            TokenError::SignatureMismatch => "TOKEN_SIGNATURE_MISMATCH",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::DecryptionFailed => "TOKEN_DECRYPTION_FAILED",
            TokenError::ReferenceMismatch => "TOKEN_REFERENCE_MISMATCH",
        }
    }
}
