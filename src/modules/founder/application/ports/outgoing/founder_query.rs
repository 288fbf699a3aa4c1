use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::{
    FounderProfile, ScoutProject, ScoutSort,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FounderQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FounderQuery: Send + Sync {
    async fn find_by_id(&self, founder_id: Uuid) -> Result<Option<FounderProfile>, FounderQueryError>;

    /// Visible founders only, each with its vote count.
    async fn list_visible(
        &self,
        sort: ScoutSort,
        page: &PageRequest,
    ) -> Result<PageResult<ScoutProject>, FounderQueryError>;

    /// `None` when the founder is missing or not visible.
    async fn find_visible(&self, founder_id: Uuid) -> Result<Option<ScoutProject>, FounderQueryError>;
}
