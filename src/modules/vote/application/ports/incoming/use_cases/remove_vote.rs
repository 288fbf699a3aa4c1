use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vote::application::domain::entities::VoteStatus;

#[derive(Debug, Clone)]
pub enum RemoveVoteError {
    InvalidEmail(String),
    VoteNotFound,
    RepositoryError(String),
}

impl fmt::Display for RemoveVoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveVoteError::InvalidEmail(msg) => write!(f, "invalid email: {}", msg),
            RemoveVoteError::VoteNotFound => write!(f, "vote not found"),
            RemoveVoteError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait RemoveVoteUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid, email: &str) -> Result<VoteStatus, RemoveVoteError>;
}
