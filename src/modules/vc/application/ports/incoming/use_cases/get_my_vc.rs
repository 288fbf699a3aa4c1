use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcListing;

#[derive(Debug, Clone)]
pub enum GetMyVcError {
    NotFound,
    QueryError(String),
}

impl fmt::Display for GetMyVcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetMyVcError::NotFound => write!(f, "no listing for this investor"),
            GetMyVcError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetMyVcUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<VcListing, GetMyVcError>;
}
