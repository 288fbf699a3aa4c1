use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcListing;
use crate::modules::vc::application::ports::incoming::use_cases::{VerifyVcError, VerifyVcUseCase};
use crate::modules::vc::application::ports::outgoing::{VcRepository, VcRepositoryError};

pub struct VerifyVcService<R>
where
    R: VcRepository,
{
    repository: R,
}

impl<R> VerifyVcService<R>
where
    R: VcRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> VerifyVcUseCase for VerifyVcService<R>
where
    R: VcRepository + Send + Sync,
{
    async fn execute(&self, vc_id: Uuid, is_verified: bool) -> Result<VcListing, VerifyVcError> {
        let listing = self
            .repository
            .set_verified(vc_id, is_verified)
            .await
            .map_err(|e| match e {
                VcRepositoryError::NotFound => VerifyVcError::NotFound,
                other => VerifyVcError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(vc_id = %vc_id, is_verified, "VC verification changed");
        Ok(listing)
    }
}
