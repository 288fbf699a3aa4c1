use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc_request::application::domain::entities::VcRequestStats;

#[derive(Debug, Clone)]
pub enum GetMyRequestStatsError {
    NoListing,
    RepositoryError(String),
}

impl fmt::Display for GetMyRequestStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetMyRequestStatsError::NoListing => write!(f, "caller has no vc listing"),
            GetMyRequestStatsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetMyRequestStatsUseCase: Send + Sync {
    async fn execute(&self, investor_user_id: Uuid) -> Result<VcRequestStats, GetMyRequestStatsError>;
}
