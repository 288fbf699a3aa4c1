use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::vc_request::application::domain::entities::{VcRequestKind, VcRequestStats};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VcRequestRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Append-only log of paid founder requests toward a listing.
#[async_trait]
pub trait VcRequestRepository: Send + Sync {
    async fn record(
        &self,
        founder_id: Uuid,
        vc_id: Uuid,
        kind: VcRequestKind,
    ) -> Result<(), VcRequestRepositoryError>;

    async fn stats_for_vc(&self, vc_id: Uuid) -> Result<VcRequestStats, VcRequestRepositoryError>;
}
