use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmailSubmissionRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Stores `(email, source)` pairs. Both values arrive already normalized.
#[async_trait]
pub trait EmailSubmissionRepository: Send + Sync {
    /// Recording an existing pair is a no-op.
    async fn record(&self, email: &str, source: &str) -> Result<(), EmailSubmissionRepositoryError>;

    async fn exists(&self, email: &str, source: &str) -> Result<bool, EmailSubmissionRepositoryError>;
}
