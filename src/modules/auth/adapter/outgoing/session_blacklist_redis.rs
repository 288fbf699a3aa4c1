use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::session_blacklist::{
    SessionBlacklist, SessionBlacklistError,
};

/// Redis-backed session blacklist.
///
/// Keys:
/// ```text
/// session:revoked:{token_hash}  -> "{user_id}"   TTL = token lifetime left
/// session:revoked:user:{user_id} -> SET(token_hash) TTL refreshed on each revoke
/// ```
/// Redis TTL is the only cleanup mechanism.
#[derive(Clone)]
pub struct RedisSessionBlacklist {
    pool: Arc<Pool>,
}

impl RedisSessionBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("session:revoked:{token_hash}")
    }

    fn user_key(user_id: Uuid) -> String {
        format!("session:revoked:user:{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionBlacklistError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionBlacklistError::StoreError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionBlacklist for RedisSessionBlacklist {
    async fn revoke(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(SessionBlacklistError::AlreadyExpired);
        }

        let token_key = Self::token_key(&token_hash);
        let user_key = Self::user_key(user_id);

        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&token_key)
            .arg(user_id.to_string())
            .arg("EX")
            .arg(ttl)
            .ignore()
            .cmd("SADD")
            .arg(&user_key)
            .arg(&token_hash)
            .ignore()
            .cmd("EXPIRE")
            .arg(&user_key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionBlacklistError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionBlacklistError> {
        let key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| SessionBlacklistError::StoreError(e.to_string()))?;

        Ok(exists)
    }
}
