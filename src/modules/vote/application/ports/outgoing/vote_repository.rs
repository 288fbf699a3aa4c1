use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VoteRepositoryError {
    #[error("email already voted for this project")]
    AlreadyVoted,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Fails with `AlreadyVoted` on the `(founder_id, email)` unique index.
    async fn insert_vote(&self, founder_id: Uuid, email: &str) -> Result<(), VoteRepositoryError>;

    /// Returns false when there was nothing to delete.
    async fn delete_vote(&self, founder_id: Uuid, email: &str) -> Result<bool, VoteRepositoryError>;

    async fn has_voted(&self, founder_id: Uuid, email: &str) -> Result<bool, VoteRepositoryError>;

    /// `created_at` of the newest vote cast by `email` on any project.
    async fn last_vote_at(&self, email: &str) -> Result<Option<DateTime<Utc>>, VoteRepositoryError>;

    async fn count_for(&self, founder_id: Uuid) -> Result<u64, VoteRepositoryError>;
}
