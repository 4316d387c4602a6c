//! # Tessera Core
//!
//! Stateless token lifecycle engine: signed access tokens, encrypted refresh
//! tokens and the issue/validate/refresh protocol that binds them, plus the
//! subject repository interface the HTTP layer resolves identities through.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Subject, TokenPair};
pub use domain::value_objects::SecretMaterial;
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{InMemorySubjectRepository, SubjectRepository};
pub use services::{RefreshExpiryPolicy, TokenService, TokenServiceConfig};
