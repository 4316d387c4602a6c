//! Maps core failures onto HTTP responses
//!
//! Every credential failure collapses into the same 401 body. The concrete
//! kind is only ever logged, so clients cannot tell an expired token from a
//! forged one.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use ts_core::errors::DomainError;
use ts_shared::errors::{error_codes, ErrorResponse};

/// Errors surfaced by handlers and middleware
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization header absent or not a bearer credential
    #[error("Missing or malformed Authorization header")]
    MissingCredentials,

    /// Request body failed validation
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// Stable code naming the failure kind, for logs only
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingCredentials => "MISSING_CREDENTIALS",
            ApiError::Validation(_) => error_codes::VALIDATION_ERROR,
            ApiError::Domain(DomainError::Token(kind)) => kind.code(),
            ApiError::Domain(DomainError::NotFound { .. }) => "SUBJECT_NOT_FOUND",
            ApiError::Domain(DomainError::Configuration { .. }) => "CONFIGURATION_ERROR",
            ApiError::Domain(DomainError::Internal { .. }) => error_codes::INTERNAL_ERROR,
        }
    }

    /// Whether this is a credential failure answered with 401
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::MissingCredentials
                | ApiError::Domain(DomainError::Token(_))
                | ApiError::Domain(DomainError::NotFound { .. })
        )
    }

    /// Logs the failure kind at a level matching its severity
    pub fn log(&self, context: &str) {
        if self.is_unauthorized() {
            log::warn!("{} rejected: {}", context, self.kind());
        } else if matches!(self, ApiError::Validation(_)) {
            log::debug!("{} rejected: {}", context, self);
        } else {
            log::error!("{} failed: {}", context, self);
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            _ if self.is_unauthorized() => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            _ if self.is_unauthorized() => ErrorResponse::unauthorized(),
            ApiError::Validation(errors) => {
                let fields: Vec<&str> = errors.field_errors().keys().copied().collect();
                ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body")
                    .add_detail("fields", fields)
            }
            _ => ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Converts a domain error into its HTTP response, logging the kind
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let error = ApiError::from(error);
    error.log("Request");
    error.error_response()
}
