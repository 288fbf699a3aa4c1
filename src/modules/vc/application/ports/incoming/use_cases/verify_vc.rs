use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcListing;

#[derive(Debug, Clone)]
pub enum VerifyVcError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for VerifyVcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyVcError::NotFound => write!(f, "vc not found"),
            VerifyVcError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait VerifyVcUseCase: Send + Sync {
    async fn execute(&self, vc_id: Uuid, is_verified: bool) -> Result<VcListing, VerifyVcError>;
}
