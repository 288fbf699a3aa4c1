use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::{normalize_tags, VcChanges, VcListing};
use crate::modules::vc::application::ports::incoming::use_cases::{PatchMyVcError, PatchMyVcUseCase};
use crate::modules::vc::application::ports::outgoing::{VcRepository, VcRepositoryError};
use crate::shared::patch::PatchField;

pub struct PatchMyVcService<R>
where
    R: VcRepository,
{
    repository: R,
}

impl<R> PatchMyVcService<R>
where
    R: VcRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn normalize(field: PatchField<Vec<String>>) -> PatchField<Vec<String>> {
    match field {
        PatchField::Value(tags) => PatchField::Value(normalize_tags(tags)),
        other => other,
    }
}

#[async_trait]
impl<R> PatchMyVcUseCase for PatchMyVcService<R>
where
    R: VcRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, mut changes: VcChanges) -> Result<VcListing, PatchMyVcError> {
        if changes.is_empty() {
            return Err(PatchMyVcError::Validation("no changes submitted".to_string()));
        }
        changes.validate().map_err(PatchMyVcError::Validation)?;
        changes.sectors = normalize(changes.sectors);
        changes.stages = normalize(changes.stages);

        let listing = self
            .repository
            .store_pending_changes(user_id, changes)
            .await
            .map_err(|e| match e {
                VcRepositoryError::NotFound => PatchMyVcError::NotFound,
                other => PatchMyVcError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(vc_id = %listing.card.id, "VC changes submitted for review");
        Ok(listing)
    }
}
