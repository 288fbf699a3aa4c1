use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::{FounderPatch, FounderProfile};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FounderRepositoryError {
    #[error("founder not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FounderRepository: Send + Sync {
    /// Returns the founder row for `user_id`, inserting an empty one if none exists.
    async fn ensure_for_user(&self, user_id: Uuid) -> Result<FounderProfile, FounderRepositoryError>;

    async fn apply_patch(
        &self,
        user_id: Uuid,
        patch: FounderPatch,
    ) -> Result<FounderProfile, FounderRepositoryError>;

    /// One-way flip to visible. Calling it on a visible founder is a no-op.
    async fn mark_visible(&self, founder_id: Uuid) -> Result<(), FounderRepositoryError>;
}
