use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vote::application::domain::entities::VoteStatus;

#[derive(Debug, Clone)]
pub enum CastVoteError {
    InvalidEmail(String),
    ProjectNotFound,
    AlreadyVoted,
    RateLimited { retry_after_secs: i64 },
    RepositoryError(String),
}

impl fmt::Display for CastVoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastVoteError::InvalidEmail(msg) => write!(f, "invalid email: {}", msg),
            CastVoteError::ProjectNotFound => write!(f, "project not found"),
            CastVoteError::AlreadyVoted => write!(f, "already voted for this project"),
            CastVoteError::RateLimited { retry_after_secs } => {
                write!(f, "vote limit reached, retry in {}s", retry_after_secs)
            }
            CastVoteError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CastVoteUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid, email: &str) -> Result<VoteStatus, CastVoteError>;
}
