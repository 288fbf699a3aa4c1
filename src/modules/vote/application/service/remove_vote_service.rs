use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vote::application::domain::entities::VoteStatus;
use crate::modules::vote::application::ports::incoming::use_cases::{
    RemoveVoteError, RemoveVoteUseCase,
};
use crate::modules::vote::application::ports::outgoing::VoteRepository;
use crate::shared::email::normalize_email;

pub struct RemoveVoteService<R>
where
    R: VoteRepository,
{
    votes: R,
}

impl<R> RemoveVoteService<R>
where
    R: VoteRepository,
{
    pub fn new(votes: R) -> Self {
        Self { votes }
    }
}

#[async_trait]
impl<R> RemoveVoteUseCase for RemoveVoteService<R>
where
    R: VoteRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid, email: &str) -> Result<VoteStatus, RemoveVoteError> {
        let email = normalize_email(email).map_err(RemoveVoteError::InvalidEmail)?;

        let deleted = self
            .votes
            .delete_vote(project_id, &email)
            .await
            .map_err(|e| RemoveVoteError::RepositoryError(e.to_string()))?;
        if !deleted {
            return Err(RemoveVoteError::VoteNotFound);
        }

        let vote_count = self
            .votes
            .count_for(project_id)
            .await
            .map_err(|e| RemoveVoteError::RepositoryError(e.to_string()))?;

        Ok(VoteStatus {
            has_voted: false,
            vote_count,
        })
    }
}
