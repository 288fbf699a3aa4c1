use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::payment::application::domain::entities::Payment;

#[derive(Debug, Clone)]
pub enum ListMyPaymentsError {
    RepositoryError(String),
}

impl fmt::Display for ListMyPaymentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMyPaymentsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListMyPaymentsUseCase: Send + Sync {
    async fn execute(&self, founder_user_id: Uuid) -> Result<Vec<Payment>, ListMyPaymentsError>;
}
