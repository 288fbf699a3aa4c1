use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::vc::application::ports::outgoing::VcQuery;
use crate::modules::vc_request::application::domain::entities::VcRequestStats;
use crate::modules::vc_request::application::ports::incoming::use_cases::{
    GetMyRequestStatsError, GetMyRequestStatsUseCase,
};
use crate::modules::vc_request::application::ports::outgoing::VcRequestRepository;

pub struct GetMyRequestStatsService<R>
where
    R: VcRequestRepository,
{
    requests: R,
    vcs: Arc<dyn VcQuery + Send + Sync>,
}

impl<R> GetMyRequestStatsService<R>
where
    R: VcRequestRepository,
{
    pub fn new(requests: R, vcs: Arc<dyn VcQuery + Send + Sync>) -> Self {
        Self { requests, vcs }
    }
}

#[async_trait]
impl<R> GetMyRequestStatsUseCase for GetMyRequestStatsService<R>
where
    R: VcRequestRepository + Send + Sync,
{
    async fn execute(&self, investor_user_id: Uuid) -> Result<VcRequestStats, GetMyRequestStatsError> {
        let listing = self
            .vcs
            .find_by_user(investor_user_id)
            .await
            .map_err(|e| GetMyRequestStatsError::RepositoryError(e.to_string()))?
            .ok_or(GetMyRequestStatsError::NoListing)?;

        self.requests
            .stats_for_vc(listing.card.id)
            .await
            .map_err(|e| GetMyRequestStatsError::RepositoryError(e.to_string()))
    }
}
