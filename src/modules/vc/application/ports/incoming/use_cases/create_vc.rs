use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::{NewVc, VcListing};

#[derive(Debug, Clone)]
pub enum CreateVcError {
    Validation(String),
    AlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateVcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateVcError::Validation(msg) => write!(f, "invalid listing: {}", msg),
            CreateVcError::AlreadyExists => write!(f, "investor already has a listing"),
            CreateVcError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateVcUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, data: NewVc) -> Result<VcListing, CreateVcError>;
}
