use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::{
    ColdInvestor, DecisionMaker, NewColdInvestor, NewDecisionMaker,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ColdInvestorRepositoryError {
    #[error("cold investor not found")]
    InvestorNotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ColdInvestorRepository: Send + Sync {
    async fn create_investor(
        &self,
        investor: NewColdInvestor,
    ) -> Result<ColdInvestor, ColdInvestorRepositoryError>;

    async fn create_decision_maker(
        &self,
        cold_investor_id: Uuid,
        decision_maker: NewDecisionMaker,
    ) -> Result<DecisionMaker, ColdInvestorRepositoryError>;

    /// Idempotent on `(email, decision_maker_id)`.
    async fn record_unlock(
        &self,
        email: &str,
        decision_maker_id: Uuid,
        payment_id: &str,
    ) -> Result<(), ColdInvestorRepositoryError>;
}
