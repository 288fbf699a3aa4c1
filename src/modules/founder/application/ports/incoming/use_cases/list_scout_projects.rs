use async_trait::async_trait;
use std::fmt;

use crate::modules::founder::application::domain::entities::{ScoutProject, ScoutSort};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub enum ListScoutProjectsError {
    QueryError(String),
}

impl fmt::Display for ListScoutProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListScoutProjectsError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListScoutProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        sort: ScoutSort,
        page: PageRequest,
    ) -> Result<PageResult<ScoutProject>, ListScoutProjectsError>;
}
