use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcListing;

#[derive(Debug, Clone)]
pub enum ReviewPendingChangesError {
    NotFound,
    NoPendingChanges,
    RepositoryError(String),
}

impl fmt::Display for ReviewPendingChangesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewPendingChangesError::NotFound => write!(f, "vc not found"),
            ReviewPendingChangesError::NoPendingChanges => write!(f, "nothing to review"),
            ReviewPendingChangesError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait ReviewPendingChangesUseCase: Send + Sync {
    /// Applies the stored patch when `approve`, discards it otherwise.
    async fn execute(&self, vc_id: Uuid, approve: bool) -> Result<VcListing, ReviewPendingChangesError>;
}
