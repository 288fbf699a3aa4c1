use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::FounderProfile;
use crate::modules::founder::application::ports::incoming::use_cases::{
    GetMyFounderError, GetMyFounderUseCase,
};
use crate::modules::founder::application::ports::outgoing::FounderRepository;

pub struct GetMyFounderService<R>
where
    R: FounderRepository,
{
    repository: R,
}

impl<R> GetMyFounderService<R>
where
    R: FounderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetMyFounderUseCase for GetMyFounderService<R>
where
    R: FounderRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<FounderProfile, GetMyFounderError> {
        self.repository
            .ensure_for_user(user_id)
            .await
            .map_err(|e| GetMyFounderError::RepositoryError(e.to_string()))
    }
}
