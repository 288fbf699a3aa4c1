use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::{
    DecisionMakerView, NewDecisionMaker,
};

#[derive(Debug, Clone)]
pub enum CreateDecisionMakerError {
    Validation(String),
    InvestorNotFound,
    RepositoryError(String),
}

impl fmt::Display for CreateDecisionMakerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateDecisionMakerError::Validation(msg) => write!(f, "validation error: {}", msg),
            CreateDecisionMakerError::InvestorNotFound => write!(f, "cold investor not found"),
            CreateDecisionMakerError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateDecisionMakerUseCase: Send + Sync {
    /// Returns the admin view, contact fields included.
    async fn execute(
        &self,
        cold_investor_id: Uuid,
        decision_maker: NewDecisionMaker,
    ) -> Result<DecisionMakerView, CreateDecisionMakerError>;
}
