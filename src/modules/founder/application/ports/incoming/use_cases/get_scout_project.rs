use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::ScoutProject;

#[derive(Debug, Clone)]
pub enum GetScoutProjectError {
    NotFound,
    QueryError(String),
}

impl fmt::Display for GetScoutProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetScoutProjectError::NotFound => write!(f, "project not found"),
            GetScoutProjectError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetScoutProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<ScoutProject, GetScoutProjectError>;
}
