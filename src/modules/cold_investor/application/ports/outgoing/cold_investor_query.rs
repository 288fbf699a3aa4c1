use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::{
    ColdInvestorRecord, DecisionMaker,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ColdInvestorQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait ColdInvestorQuery: Send + Sync {
    /// Funds ordered by name, each with its decision makers.
    async fn list_investors(
        &self,
        page: &PageRequest,
    ) -> Result<PageResult<ColdInvestorRecord>, ColdInvestorQueryError>;

    async fn find_decision_maker(
        &self,
        decision_maker_id: Uuid,
    ) -> Result<Option<DecisionMaker>, ColdInvestorQueryError>;

    async fn unlocked_decision_maker_ids(
        &self,
        email: &str,
    ) -> Result<Vec<Uuid>, ColdInvestorQueryError>;

    async fn is_unlocked(
        &self,
        email: &str,
        decision_maker_id: Uuid,
    ) -> Result<bool, ColdInvestorQueryError>;
}
