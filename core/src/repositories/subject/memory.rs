//! In-memory subject directory

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::subject::Subject;
use crate::errors::DomainError;

use super::r#trait::SubjectRepository;

/// Subject repository backed by a shared map
#[derive(Clone, Debug, Default)]
pub struct InMemorySubjectRepository {
    subjects: Arc<RwLock<HashMap<String, Subject>>>,
}

impl InMemorySubjectRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `subjects`
    pub fn with_subjects(subjects: impl IntoIterator<Item = Subject>) -> Self {
        let subjects = subjects
            .into_iter()
            .map(|subject| (subject.id.clone(), subject))
            .collect();

        Self {
            subjects: Arc::new(RwLock::new(subjects)),
        }
    }

    /// Insert or replace a subject
    pub async fn insert(&self, subject: Subject) {
        let mut subjects = self.subjects.write().await;
        subjects.insert(subject.id.clone(), subject);
    }

    /// Remove a subject, returning it if present
    pub async fn remove(&self, id: &str) -> Option<Subject> {
        let mut subjects = self.subjects.write().await;
        subjects.remove(id)
    }

    /// Number of subjects held
    pub async fn len(&self) -> usize {
        self.subjects.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.subjects.read().await.is_empty()
    }
}

#[async_trait]
impl SubjectRepository for InMemorySubjectRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Subject>, DomainError> {
        let subjects = self.subjects.read().await;
        Ok(subjects.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_id() {
        let repository = InMemorySubjectRepository::with_subjects([
            Subject::new("u-1", "Ada", "ada@example.com"),
            Subject::new("u-2", "Grace", "grace@example.com"),
        ]);

        let found = repository.find_by_id("u-2").await.unwrap();
        assert_eq!(found.map(|s| s.name), Some("Grace".to_string()));
        assert!(repository.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_and_remove() {
        let repository = InMemorySubjectRepository::new();
        assert!(repository.is_empty().await);

        repository.insert(Subject::new("u-1", "Ada", "ada@example.com")).await;
        repository
            .insert(Subject::new("u-1", "Ada L.", "ada@example.com").with_role("admin"))
            .await;
        assert_eq!(repository.len().await, 1);

        let stored = repository.find_by_id("u-1").await.unwrap().unwrap();
        assert_eq!(stored.name, "Ada L.");
        assert_eq!(stored.role, "admin");

        assert!(repository.remove("u-1").await.is_some());
        assert!(repository.find_by_id("u-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repository = InMemorySubjectRepository::new();
        let handle = repository.clone();

        handle.insert(Subject::new("u-1", "Ada", "ada@example.com")).await;
        assert!(repository.find_by_id("u-1").await.unwrap().is_some());
    }
}
