use async_trait::async_trait;
use std::fmt;

use crate::modules::vc::application::domain::entities::VcListing;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub enum ListAllVcsError {
    QueryError(String),
}

impl fmt::Display for ListAllVcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListAllVcsError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListAllVcsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<VcListing>, ListAllVcsError>;
}
