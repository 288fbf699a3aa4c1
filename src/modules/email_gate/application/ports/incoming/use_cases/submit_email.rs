use async_trait::async_trait;
use std::fmt;

use crate::modules::email_gate::application::domain::entities::EmailAccess;

#[derive(Debug, Clone)]
pub enum SubmitEmailError {
    Validation(String),
    RepositoryError(String),
}

impl fmt::Display for SubmitEmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitEmailError::Validation(msg) => write!(f, "validation error: {}", msg),
            SubmitEmailError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait SubmitEmailUseCase: Send + Sync {
    async fn execute(&self, email: &str, source: &str) -> Result<EmailAccess, SubmitEmailError>;
}
