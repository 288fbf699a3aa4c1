use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::founder::application::ports::outgoing::FounderQuery;
use crate::modules::vote::application::domain::entities::VoteStatus;
use crate::modules::vote::application::ports::incoming::use_cases::{
    VoteStatusError, VoteStatusUseCase,
};
use crate::modules::vote::application::ports::outgoing::VoteRepository;
use crate::shared::email::normalize_email;

pub struct VoteStatusService<R>
where
    R: VoteRepository,
{
    votes: R,
    projects: Arc<dyn FounderQuery + Send + Sync>,
}

impl<R> VoteStatusService<R>
where
    R: VoteRepository,
{
    pub fn new(votes: R, projects: Arc<dyn FounderQuery + Send + Sync>) -> Self {
        Self { votes, projects }
    }
}

#[async_trait]
impl<R> VoteStatusUseCase for VoteStatusService<R>
where
    R: VoteRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid, email: &str) -> Result<VoteStatus, VoteStatusError> {
        let email = normalize_email(email).map_err(VoteStatusError::InvalidEmail)?;

        let project = self
            .projects
            .find_visible(project_id)
            .await
            .map_err(|e| VoteStatusError::RepositoryError(e.to_string()))?
            .ok_or(VoteStatusError::ProjectNotFound)?;

        let has_voted = self
            .votes
            .has_voted(project_id, &email)
            .await
            .map_err(|e| VoteStatusError::RepositoryError(e.to_string()))?;

        Ok(VoteStatus {
            has_voted,
            vote_count: project.vote_count,
        })
    }
}
