use async_trait::async_trait;
use std::fmt;

use crate::modules::email_gate::application::domain::entities::EmailAccess;

#[derive(Debug, Clone)]
pub enum CheckAccessError {
    Validation(String),
    RepositoryError(String),
}

impl fmt::Display for CheckAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckAccessError::Validation(msg) => write!(f, "validation error: {}", msg),
            CheckAccessError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CheckAccessUseCase: Send + Sync {
    async fn execute(&self, email: &str, source: &str) -> Result<EmailAccess, CheckAccessError>;
}
