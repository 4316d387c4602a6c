use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use ts_core::{Subject, TokenPair};

/// Body of `POST /api/v1/sessions/refresh`: the pair previously issued
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1))]
    pub access_token: String,
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

impl From<RefreshRequest> for TokenPair {
    fn from(request: RefreshRequest) -> Self {
        TokenPair::new(request.access_token, request.refresh_token)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject.id,
            name: subject.name,
            email: subject.email,
            role: subject.role,
        }
    }
}

/// A freshly issued token pair together with its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64, // seconds
    pub subject: SubjectResponse,
}

impl TokenResponse {
    pub fn new(pair: TokenPair, expires_in: i64, subject: Subject) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in,
            subject: subject.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub subject: SubjectResponse,
    pub expires_at: Option<DateTime<Utc>>,
    pub expires_in: i64, // seconds
}
