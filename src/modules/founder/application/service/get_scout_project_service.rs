use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::ScoutProject;
use crate::modules::founder::application::ports::incoming::use_cases::{
    GetScoutProjectError, GetScoutProjectUseCase,
};
use crate::modules::founder::application::ports::outgoing::FounderQuery;

pub struct GetScoutProjectService<Q>
where
    Q: FounderQuery,
{
    query: Q,
}

impl<Q> GetScoutProjectService<Q>
where
    Q: FounderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetScoutProjectUseCase for GetScoutProjectService<Q>
where
    Q: FounderQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<ScoutProject, GetScoutProjectError> {
        self.query
            .find_visible(project_id)
            .await
            .map_err(|e| GetScoutProjectError::QueryError(e.to_string()))?
            .ok_or(GetScoutProjectError::NotFound)
    }
}
