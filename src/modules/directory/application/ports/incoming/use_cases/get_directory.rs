use async_trait::async_trait;
use std::fmt;

use crate::modules::directory::application::domain::entities::DirectoryEntry;

#[derive(Debug, Clone)]
pub enum GetDirectoryError {
    InvalidEmail(String),
    EmailNotSubmitted,
    Unavailable(String),
    RepositoryError(String),
}

impl fmt::Display for GetDirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetDirectoryError::InvalidEmail(msg) => write!(f, "invalid email: {}", msg),
            GetDirectoryError::EmailNotSubmitted => write!(f, "email has not been submitted"),
            GetDirectoryError::Unavailable(msg) => write!(f, "directory unavailable: {}", msg),
            GetDirectoryError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetDirectoryUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<Vec<DirectoryEntry>, GetDirectoryError>;
}
