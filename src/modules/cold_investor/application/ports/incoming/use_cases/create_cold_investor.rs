use async_trait::async_trait;
use std::fmt;

use crate::modules::cold_investor::application::domain::entities::{ColdInvestor, NewColdInvestor};

#[derive(Debug, Clone)]
pub enum CreateColdInvestorError {
    Validation(String),
    RepositoryError(String),
}

impl fmt::Display for CreateColdInvestorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateColdInvestorError::Validation(msg) => write!(f, "validation error: {}", msg),
            CreateColdInvestorError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateColdInvestorUseCase: Send + Sync {
    async fn execute(&self, investor: NewColdInvestor) -> Result<ColdInvestor, CreateColdInvestorError>;
}
