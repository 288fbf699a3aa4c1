use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::session_blacklist::{
    SessionBlacklist, SessionBlacklistError,
};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

type TokenData = web::Data<Arc<dyn TokenProvider + Send + Sync>>;
type BlacklistData = web::Data<Arc<dyn SessionBlacklist + Send + Sync>>;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_32b".to_string(),
        issuer: "vc-market-test".to_string(),
        session_expiry: 3600,
    }
}

/// Blacklist that answers with a fixed verdict.
#[derive(Clone)]
pub struct FixedBlacklist {
    revoked: bool,
}

#[async_trait]
impl SessionBlacklist for FixedBlacklist {
    async fn revoke(
        &self,
        _token_hash: String,
        _user_id: Uuid,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError> {
        Ok(())
    }

    async fn is_revoked(&self, _token_hash: &str) -> Result<bool, SessionBlacklistError> {
        Ok(self.revoked)
    }
}

pub fn token_provider_data() -> TokenData {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(test_jwt_config()));
    web::Data::new(provider)
}

pub fn open_blacklist_data() -> BlacklistData {
    let blacklist: Arc<dyn SessionBlacklist + Send + Sync> =
        Arc::new(FixedBlacklist { revoked: false });
    web::Data::new(blacklist)
}

pub fn revoked_blacklist_data() -> BlacklistData {
    let blacklist: Arc<dyn SessionBlacklist + Send + Sync> =
        Arc::new(FixedBlacklist { revoked: true });
    web::Data::new(blacklist)
}

/// Token provider and a blacklist that revokes nothing, ready for `App::app_data`.
pub fn auth_app_data() -> (TokenData, BlacklistData) {
    (token_provider_data(), open_blacklist_data())
}

/// A valid session token for `<role>@example.com`.
pub fn session_token(user_id: Uuid, role: UserRole) -> String {
    JwtTokenService::new(test_jwt_config())
        .generate_session_token(user_id, &format!("{}@example.com", role.as_str()), role)
        .expect("test token should encode")
        .token
}

pub fn bearer(user_id: Uuid, role: UserRole) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", session_token(user_id, role)))
}
