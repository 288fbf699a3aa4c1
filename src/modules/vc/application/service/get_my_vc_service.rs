use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcListing;
use crate::modules::vc::application::ports::incoming::use_cases::{GetMyVcError, GetMyVcUseCase};
use crate::modules::vc::application::ports::outgoing::VcQuery;

pub struct GetMyVcService<Q>
where
    Q: VcQuery,
{
    query: Q,
}

impl<Q> GetMyVcService<Q>
where
    Q: VcQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMyVcUseCase for GetMyVcService<Q>
where
    Q: VcQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<VcListing, GetMyVcError> {
        self.query
            .find_by_user(user_id)
            .await
            .map_err(|e| GetMyVcError::QueryError(e.to_string()))?
            .ok_or(GetMyVcError::NotFound)
    }
}
