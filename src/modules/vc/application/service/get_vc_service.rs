use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcCard;
use crate::modules::vc::application::ports::incoming::use_cases::{GetVcError, GetVcUseCase};
use crate::modules::vc::application::ports::outgoing::VcQuery;

pub struct GetVcService<Q>
where
    Q: VcQuery,
{
    query: Q,
}

impl<Q> GetVcService<Q>
where
    Q: VcQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetVcUseCase for GetVcService<Q>
where
    Q: VcQuery + Send + Sync,
{
    async fn execute(&self, vc_id: Uuid) -> Result<VcCard, GetVcError> {
        self.query
            .find_by_id(vc_id)
            .await
            .map_err(|e| GetVcError::QueryError(e.to_string()))?
            .map(|listing| listing.card)
            .ok_or(GetVcError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::vc_listing;
    use crate::tests::support::mock_ports::MockVcQuery;

    #[tokio::test]
    async fn test_returns_card_only() {
        let listing = vc_listing();
        let service = GetVcService::new(MockVcQuery::with(vec![listing.clone()]));

        let card = service.execute(listing.card.id).await.unwrap();
        assert_eq!(card, listing.card);
    }

    #[tokio::test]
    async fn test_unknown_vc() {
        let service = GetVcService::new(MockVcQuery::with(vec![]));
        let err = service.execute(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, GetVcError::NotFound));
    }
}
