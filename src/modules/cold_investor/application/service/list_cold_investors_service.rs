use async_trait::async_trait;
use std::collections::HashSet;

use crate::modules::cold_investor::application::domain::entities::{
    ColdInvestorListing, DecisionMakerView,
};
use crate::modules::cold_investor::application::ports::incoming::use_cases::{
    ListColdInvestorsError, ListColdInvestorsUseCase,
};
use crate::modules::cold_investor::application::ports::outgoing::ColdInvestorQuery;
use crate::shared::email::normalize_email;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListColdInvestorsService<Q>
where
    Q: ColdInvestorQuery,
{
    query: Q,
}

impl<Q> ListColdInvestorsService<Q>
where
    Q: ColdInvestorQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListColdInvestorsUseCase for ListColdInvestorsService<Q>
where
    Q: ColdInvestorQuery + Send + Sync,
{
    async fn execute(
        &self,
        viewer_email: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<ColdInvestorListing>, ListColdInvestorsError> {
        let records = self
            .query
            .list_investors(&page)
            .await
            .map_err(|e| ListColdInvestorsError::QueryError(e.to_string()))?;

        // An unusable viewer email just means nothing is unlocked.
        let unlocked: HashSet<_> = match viewer_email.as_deref().map(normalize_email) {
            Some(Ok(email)) => self
                .query
                .unlocked_decision_maker_ids(&email)
                .await
                .map_err(|e| ListColdInvestorsError::QueryError(e.to_string()))?
                .into_iter()
                .collect(),
            _ => HashSet::new(),
        };

        let items = records
            .items
            .into_iter()
            .map(|record| ColdInvestorListing {
                investor: record.investor,
                decision_makers: record
                    .decision_makers
                    .into_iter()
                    .map(|dm| {
                        let is_unlocked = unlocked.contains(&dm.id);
                        DecisionMakerView::for_viewer(dm, is_unlocked)
                    })
                    .collect(),
            })
            .collect();

        Ok(PageResult {
            items,
            page: records.page,
            per_page: records.per_page,
            total: records.total,
        })
    }
}
