use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcListing;
use crate::modules::vc::application::ports::incoming::use_cases::{
    ReviewPendingChangesError, ReviewPendingChangesUseCase,
};
use crate::modules::vc::application::ports::outgoing::{VcRepository, VcRepositoryError};

pub struct ReviewPendingChangesService<R>
where
    R: VcRepository,
{
    repository: R,
}

impl<R> ReviewPendingChangesService<R>
where
    R: VcRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReviewPendingChangesUseCase for ReviewPendingChangesService<R>
where
    R: VcRepository + Send + Sync,
{
    async fn execute(
        &self,
        vc_id: Uuid,
        approve: bool,
    ) -> Result<VcListing, ReviewPendingChangesError> {
        let result = if approve {
            self.repository.apply_pending_changes(vc_id).await
        } else {
            self.repository.discard_pending_changes(vc_id).await
        };

        let listing = result.map_err(|e| match e {
            VcRepositoryError::NotFound => ReviewPendingChangesError::NotFound,
            VcRepositoryError::NoPendingChanges => ReviewPendingChangesError::NoPendingChanges,
            other => ReviewPendingChangesError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(vc_id = %vc_id, approve, "Pending VC changes reviewed");
        Ok(listing)
    }
}
