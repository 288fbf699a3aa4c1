use async_trait::async_trait;

use crate::modules::vc::application::domain::entities::VcListing;
use crate::modules::vc::application::ports::incoming::use_cases::{
    ListAllVcsError, ListAllVcsUseCase,
};
use crate::modules::vc::application::ports::outgoing::VcQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListAllVcsService<Q>
where
    Q: VcQuery,
{
    query: Q,
}

impl<Q> ListAllVcsService<Q>
where
    Q: VcQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAllVcsUseCase for ListAllVcsService<Q>
where
    Q: VcQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<VcListing>, ListAllVcsError> {
        self.query
            .list_all(&page)
            .await
            .map_err(|e| ListAllVcsError::QueryError(e.to_string()))
    }
}
