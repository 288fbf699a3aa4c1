use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcCard;

#[derive(Debug, Clone)]
pub enum GetVcError {
    NotFound,
    QueryError(String),
}

impl fmt::Display for GetVcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetVcError::NotFound => write!(f, "vc not found"),
            GetVcError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetVcUseCase: Send + Sync {
    async fn execute(&self, vc_id: Uuid) -> Result<VcCard, GetVcError>;
}
