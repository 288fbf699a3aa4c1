use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::{FounderPatch, FounderProfile};

#[derive(Debug, Clone)]
pub enum PatchMyFounderError {
    Validation(String),
    RepositoryError(String),
}

impl fmt::Display for PatchMyFounderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchMyFounderError::Validation(msg) => write!(f, "invalid patch: {}", msg),
            PatchMyFounderError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait PatchMyFounderUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        patch: FounderPatch,
    ) -> Result<FounderProfile, PatchMyFounderError>;
}
