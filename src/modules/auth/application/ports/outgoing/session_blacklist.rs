use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionBlacklistError {
    #[error("Token already expired")]
    AlreadyExpired,

    #[error("Blacklist store error: {0}")]
    StoreError(String),
}

/// Revoked session tokens, keyed by the SHA-256 hash of the raw token.
#[async_trait]
pub trait SessionBlacklist: Send + Sync {
    async fn revoke(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionBlacklistError>;
}
