use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::{FounderPatch, FounderProfile};
use crate::modules::founder::application::ports::incoming::use_cases::{
    PatchMyFounderError, PatchMyFounderUseCase,
};
use crate::modules::founder::application::ports::outgoing::FounderRepository;

pub struct PatchMyFounderService<R>
where
    R: FounderRepository,
{
    repository: R,
}

impl<R> PatchMyFounderService<R>
where
    R: FounderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchMyFounderUseCase for PatchMyFounderService<R>
where
    R: FounderRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        patch: FounderPatch,
    ) -> Result<FounderProfile, PatchMyFounderError> {
        patch.validate().map_err(PatchMyFounderError::Validation)?;

        // Row must exist before the UPDATE so a first-visit patch still lands.
        let current = self
            .repository
            .ensure_for_user(user_id)
            .await
            .map_err(|e| PatchMyFounderError::RepositoryError(e.to_string()))?;

        if patch.is_empty() {
            return Ok(current);
        }

        self.repository
            .apply_patch(user_id, patch)
            .await
            .map_err(|e| PatchMyFounderError::RepositoryError(e.to_string()))
    }
}
