//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or unusable configuration, fatal at startup
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Returns the token error kind if this is a per-call token failure
    pub fn token_error(&self) -> Option<TokenError> {
        match self {
            DomainError::Token(kind) => Some(*kind),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_bridges_into_domain_error() {
        let error: DomainError = TokenError::Expired.into();
        assert!(matches!(error, DomainError::Token(TokenError::Expired)));
        assert_eq!(error.token_error(), Some(TokenError::Expired));
        assert_eq!(error.to_string(), "Token expired");
    }

    #[test]
    fn test_token_error_codes_are_distinct() {
        let kinds = [
            TokenError::Malformed,
            TokenError::SignatureMismatch,
            TokenError::Expired,
            TokenError::DecryptionFailed,
            TokenError::ReferenceMismatch,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_configuration_error_is_not_a_token_error() {
        let error = DomainError::Configuration {
            message: "SECRET_KEY is empty".to_string(),
        };
        assert_eq!(error.token_error(), None);
        assert!(error.to_string().contains("SECRET_KEY"));
    }
}
