use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::FounderProfile;

#[derive(Debug, Clone)]
pub enum GetMyFounderError {
    RepositoryError(String),
}

impl fmt::Display for GetMyFounderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetMyFounderError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetMyFounderUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<FounderProfile, GetMyFounderError>;
}
