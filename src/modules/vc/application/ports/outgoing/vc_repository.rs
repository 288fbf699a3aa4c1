use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::{NewVc, VcChanges, VcListing};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VcRepositoryError {
    #[error("investor already has a listing")]
    AlreadyExists,
    #[error("listing not found")]
    NotFound,
    #[error("listing has no pending changes")]
    NoPendingChanges,
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait VcRepository: Send + Sync {
    async fn create_vc(&self, user_id: Uuid, data: NewVc) -> Result<VcListing, VcRepositoryError>;

    /// Replaces whatever patch the owner had waiting for review.
    async fn store_pending_changes(
        &self,
        user_id: Uuid,
        changes: VcChanges,
    ) -> Result<VcListing, VcRepositoryError>;

    async fn set_verified(&self, vc_id: Uuid, is_verified: bool) -> Result<VcListing, VcRepositoryError>;

    async fn apply_pending_changes(&self, vc_id: Uuid) -> Result<VcListing, VcRepositoryError>;

    async fn discard_pending_changes(&self, vc_id: Uuid) -> Result<VcListing, VcRepositoryError>;
}
