use async_trait::async_trait;
use std::fmt;

use crate::modules::cold_investor::application::domain::entities::ColdInvestorListing;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub enum ListColdInvestorsError {
    QueryError(String),
}

impl fmt::Display for ListColdInvestorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListColdInvestorsError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListColdInvestorsUseCase: Send + Sync {
    /// `viewer_email` decides which decision makers show contact details.
    async fn execute(
        &self,
        viewer_email: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<ColdInvestorListing>, ListColdInvestorsError>;
}
