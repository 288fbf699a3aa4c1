use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::{normalize_tags, NewVc, VcListing};
use crate::modules::vc::application::ports::incoming::use_cases::{CreateVcError, CreateVcUseCase};
use crate::modules::vc::application::ports::outgoing::{VcRepository, VcRepositoryError};

pub struct CreateVcService<R>
where
    R: VcRepository,
{
    repository: R,
}

impl<R> CreateVcService<R>
where
    R: VcRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateVcUseCase for CreateVcService<R>
where
    R: VcRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, mut data: NewVc) -> Result<VcListing, CreateVcError> {
        data.validate().map_err(CreateVcError::Validation)?;
        data.sectors = normalize_tags(data.sectors);
        data.stages = normalize_tags(data.stages);

        let listing = self
            .repository
            .create_vc(user_id, data)
            .await
            .map_err(|e| match e {
                VcRepositoryError::AlreadyExists => CreateVcError::AlreadyExists,
                other => CreateVcError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(vc_id = %listing.card.id, user_id = %user_id, "VC listing created");
        Ok(listing)
    }
}
