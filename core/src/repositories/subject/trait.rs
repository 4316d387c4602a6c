//! Subject repository trait: the identity store the HTTP layer consults
//! after a token has been validated.

use async_trait::async_trait;

use crate::domain::entities::subject::Subject;
use crate::errors::DomainError;

/// Read access to the identity store
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ts_core::repositories::SubjectRepository;
/// use ts_core::domain::entities::subject::Subject;
/// use ts_core::errors::DomainError;
///
/// struct PostgresSubjectRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl SubjectRepository for PostgresSubjectRepository {
///     async fn find_by_id(&self, id: &str) -> Result<Option<Subject>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// Find a subject by the id carried in token claims
    ///
    /// # Returns
    /// * `Ok(Some(Subject))` - Subject found
    /// * `Ok(None)` - No subject with this id
    /// * `Err(DomainError)` - The store could not be queried
    async fn find_by_id(&self, id: &str) -> Result<Option<Subject>, DomainError>;
}
