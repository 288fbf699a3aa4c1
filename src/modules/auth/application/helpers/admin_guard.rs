use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminCheckError {
    #[error("User not found")]
    UserNotFound,

    #[error("Admin privileges required")]
    NotAdmin,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Looks the caller up on every admin request so a revoked flag takes effect immediately.
#[derive(Clone)]
pub struct AdminGuard {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl AdminGuard {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn ensure_admin(&self, user_id: Uuid) -> Result<(), AdminCheckError> {
        match self.user_query.find_by_id(user_id).await {
            Ok(Some(user)) if user.is_admin => Ok(()),
            Ok(Some(_)) => Err(AdminCheckError::NotAdmin),
            Ok(None) => Err(AdminCheckError::UserNotFound),
            Err(UserQueryError::DatabaseError(msg)) | Err(UserQueryError::CorruptRecord(msg)) => {
                Err(AdminCheckError::RepositoryError(msg))
            }
        }
    }
}
