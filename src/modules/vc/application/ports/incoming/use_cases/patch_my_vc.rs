use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::{VcChanges, VcListing};

#[derive(Debug, Clone)]
pub enum PatchMyVcError {
    Validation(String),
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for PatchMyVcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchMyVcError::Validation(msg) => write!(f, "invalid changes: {}", msg),
            PatchMyVcError::NotFound => write!(f, "no listing for this investor"),
            PatchMyVcError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait PatchMyVcUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, changes: VcChanges) -> Result<VcListing, PatchMyVcError>;
}
