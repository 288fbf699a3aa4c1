use async_trait::async_trait;
use std::fmt;

use crate::modules::vc::application::domain::entities::{VcCard, VcFilter};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub enum ListVcsError {
    QueryError(String),
}

impl fmt::Display for ListVcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListVcsError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListVcsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: VcFilter,
        page: PageRequest,
    ) -> Result<PageResult<VcCard>, ListVcsError>;
}
