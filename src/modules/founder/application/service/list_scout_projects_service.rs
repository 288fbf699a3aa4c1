use async_trait::async_trait;

use crate::modules::founder::application::domain::entities::{ScoutProject, ScoutSort};
use crate::modules::founder::application::ports::incoming::use_cases::{
    ListScoutProjectsError, ListScoutProjectsUseCase,
};
use crate::modules::founder::application::ports::outgoing::FounderQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListScoutProjectsService<Q>
where
    Q: FounderQuery,
{
    query: Q,
}

impl<Q> ListScoutProjectsService<Q>
where
    Q: FounderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListScoutProjectsUseCase for ListScoutProjectsService<Q>
where
    Q: FounderQuery + Send + Sync,
{
    async fn execute(
        &self,
        sort: ScoutSort,
        page: PageRequest,
    ) -> Result<PageResult<ScoutProject>, ListScoutProjectsError> {
        self.query
            .list_visible(sort, &page)
            .await
            .map_err(|e| ListScoutProjectsError::QueryError(e.to_string()))
    }
}
