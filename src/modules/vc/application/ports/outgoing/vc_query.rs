use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::{VcCard, VcFilter, VcListing};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VcQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait VcQuery: Send + Sync {
    async fn find_by_id(&self, vc_id: Uuid) -> Result<Option<VcListing>, VcQueryError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<VcListing>, VcQueryError>;

    async fn list_public(
        &self,
        filter: VcFilter,
        page: &PageRequest,
    ) -> Result<PageResult<VcCard>, VcQueryError>;

    /// Every listing, including unverified ones and those awaiting review.
    async fn list_all(&self, page: &PageRequest) -> Result<PageResult<VcListing>, VcQueryError>;

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<VcListing>, VcQueryError>;
}
