use async_trait::async_trait;

use crate::modules::vc::application::domain::entities::{VcCard, VcFilter};
use crate::modules::vc::application::ports::incoming::use_cases::{ListVcsError, ListVcsUseCase};
use crate::modules::vc::application::ports::outgoing::VcQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListVcsService<Q>
where
    Q: VcQuery,
{
    query: Q,
}

impl<Q> ListVcsService<Q>
where
    Q: VcQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListVcsUseCase for ListVcsService<Q>
where
    Q: VcQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: VcFilter,
        page: PageRequest,
    ) -> Result<PageResult<VcCard>, ListVcsError> {
        self.query
            .list_public(filter.normalized(), &page)
            .await
            .map_err(|e| ListVcsError::QueryError(e.to_string()))
    }
}
