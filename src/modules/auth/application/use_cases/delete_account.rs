use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::{
    SessionBlacklist, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::hash_token;
use crate::auth::application::use_cases::logout_user::LogoutRequest;

#[derive(Debug, Clone)]
pub enum DeleteAccountError {
    UserNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteAccountError::UserNotFound => write!(f, "User not found"),
            DeleteAccountError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteAccountError {}

#[async_trait]
pub trait IDeleteAccountUseCase: Send + Sync {
    /// Hard-deletes the caller and revokes the session used for the request.
    async fn execute(&self, session: LogoutRequest) -> Result<(), DeleteAccountError>;
}

#[derive(Clone)]
pub struct DeleteAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    blacklist: Arc<dyn SessionBlacklist + Send + Sync>,
}

impl<R> DeleteAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, blacklist: Arc<dyn SessionBlacklist + Send + Sync>) -> Self {
        Self {
            repository,
            blacklist,
        }
    }
}

#[async_trait]
impl<R> IDeleteAccountUseCase for DeleteAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, session: LogoutRequest) -> Result<(), DeleteAccountError> {
        self.repository
            .delete_user(session.user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteAccountError::UserNotFound,
                other => DeleteAccountError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %session.user_id, "Account deleted");

        // The account is gone either way; a stale token can no longer resolve a user.
        if let Err(e) = self
            .blacklist
            .revoke(
                hash_token(&session.session_token),
                session.user_id,
                session.expires_at,
            )
            .await
        {
            warn!(user_id = %session.user_id, "Could not revoke session after deletion: {}", e);
        }

        Ok(())
    }
}
