use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vote::application::domain::entities::VoteStatus;

#[derive(Debug, Clone)]
pub enum VoteStatusError {
    InvalidEmail(String),
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for VoteStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteStatusError::InvalidEmail(msg) => write!(f, "invalid email: {}", msg),
            VoteStatusError::ProjectNotFound => write!(f, "project not found"),
            VoteStatusError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait VoteStatusUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid, email: &str) -> Result<VoteStatus, VoteStatusError>;
}
