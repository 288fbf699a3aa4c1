use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::UnlockedVc;

#[derive(Debug, Clone)]
pub enum ListUnlockedVcsError {
    RepositoryError(String),
}

impl fmt::Display for ListUnlockedVcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListUnlockedVcsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListUnlockedVcsUseCase: Send + Sync {
    async fn execute(&self, founder_user_id: Uuid) -> Result<Vec<UnlockedVc>, ListUnlockedVcsError>;
}
