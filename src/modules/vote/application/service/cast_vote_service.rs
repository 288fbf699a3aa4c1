use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::founder::application::ports::outgoing::FounderQuery;
use crate::modules::vote::application::domain::entities::{vote_cooldown, VoteStatus};
use crate::modules::vote::application::ports::incoming::use_cases::{
    CastVoteError, CastVoteUseCase,
};
use crate::modules::vote::application::ports::outgoing::{VoteRepository, VoteRepositoryError};
use crate::shared::email::normalize_email;

pub struct CastVoteService<R>
where
    R: VoteRepository,
{
    votes: R,
    projects: Arc<dyn FounderQuery + Send + Sync>,
}

impl<R> CastVoteService<R>
where
    R: VoteRepository,
{
    pub fn new(votes: R, projects: Arc<dyn FounderQuery + Send + Sync>) -> Self {
        Self { votes, projects }
    }
}

fn repo_err(e: VoteRepositoryError) -> CastVoteError {
    match e {
        VoteRepositoryError::AlreadyVoted => CastVoteError::AlreadyVoted,
        VoteRepositoryError::DatabaseError(msg) => CastVoteError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> CastVoteUseCase for CastVoteService<R>
where
    R: VoteRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid, email: &str) -> Result<VoteStatus, CastVoteError> {
        let email = normalize_email(email).map_err(CastVoteError::InvalidEmail)?;

        let visible = self
            .projects
            .find_visible(project_id)
            .await
            .map_err(|e| CastVoteError::RepositoryError(e.to_string()))?;
        if visible.is_none() {
            return Err(CastVoteError::ProjectNotFound);
        }

        if self.votes.has_voted(project_id, &email).await.map_err(repo_err)? {
            return Err(CastVoteError::AlreadyVoted);
        }

        if let Some(last) = self.votes.last_vote_at(&email).await.map_err(repo_err)? {
            let next_allowed = last + vote_cooldown();
            let now = Utc::now();
            if next_allowed > now {
                let retry_after_secs = (next_allowed - now).num_seconds().max(1);
                tracing::warn!(project_id = %project_id, retry_after_secs, "Vote rate limited");
                return Err(CastVoteError::RateLimited { retry_after_secs });
            }
        }

        // The unique index still guards a concurrent double vote.
        self.votes
            .insert_vote(project_id, &email)
            .await
            .map_err(repo_err)?;

        let vote_count = self.votes.count_for(project_id).await.map_err(repo_err)?;
        tracing::info!(project_id = %project_id, vote_count, "Vote cast");

        Ok(VoteStatus {
            has_voted: true,
            vote_count,
        })
    }
}
