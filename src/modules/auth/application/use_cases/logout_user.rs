use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{SessionBlacklist, SessionBlacklistError};
use crate::auth::application::services::hash_token;

#[derive(Debug, Clone)]
pub struct LogoutRequest {
    pub user_id: Uuid,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    TokenRevocationFailed(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    blacklist: Arc<dyn SessionBlacklist + Send + Sync>,
}

impl LogoutUseCase {
    pub fn new(blacklist: Arc<dyn SessionBlacklist + Send + Sync>) -> Self {
        Self { blacklist }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, request: LogoutRequest) -> Result<(), LogoutError> {
        let token_hash = hash_token(&request.session_token);

        match self
            .blacklist
            .revoke(token_hash, request.user_id, request.expires_at)
            .await
        {
            Ok(()) => {
                info!(user_id = %request.user_id, "Session revoked");
                Ok(())
            }
            // Nothing left to revoke.
            Err(SessionBlacklistError::AlreadyExpired) => Ok(()),
            Err(SessionBlacklistError::StoreError(msg)) => {
                warn!(user_id = %request.user_id, "Session revocation failed: {}", msg);
                Err(LogoutError::TokenRevocationFailed(msg))
            }
        }
    }
}
