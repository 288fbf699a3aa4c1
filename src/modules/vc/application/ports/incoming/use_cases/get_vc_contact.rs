use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::vc::application::domain::entities::VcContact;

#[derive(Debug, Clone)]
pub enum GetVcContactError {
    VcNotFound,
    NotUnlocked,
    RepositoryError(String),
}

impl fmt::Display for GetVcContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetVcContactError::VcNotFound => write!(f, "vc not found"),
            GetVcContactError::NotUnlocked => write!(f, "vc not unlocked by this founder"),
            GetVcContactError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetVcContactUseCase: Send + Sync {
    /// `founder_user_id` is the caller's user id; the founder row is resolved from it.
    async fn execute(&self, founder_user_id: Uuid, vc_id: Uuid) -> Result<VcContact, GetVcContactError>;
}
