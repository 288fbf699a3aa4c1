use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::helpers::AdminCheckError;
use crate::auth::application::ports::outgoing::{SessionBlacklist, TokenProvider};
use crate::auth::application::services::hash_token;
use crate::auth::application::use_cases::logout_user::LogoutRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::session_cookie::SESSION_COOKIE;

/// Caller holding a valid, unrevoked session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn session(&self) -> LogoutRequest {
        LogoutRequest {
            user_id: self.user_id,
            session_token: self.session_token.clone(),
            expires_at: self.expires_at,
        }
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Bearer header wins over the cookie so API clients can ignore browser state.
fn extract_token(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    from_header.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|s| !s.is_empty())
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = req
            .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .cloned();
        let blacklist = req
            .app_data::<web::Data<Arc<dyn SessionBlacklist + Send + Sync>>>()
            .cloned();
        let token = extract_token(req);

        Box::pin(async move {
            let (Some(token_provider), Some(blacklist)) = (token_provider, blacklist) else {
                tracing::error!("Auth extractor used without token provider or blacklist");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "UNAUTHORIZED",
                    "Authentication required",
                ))
            })?;

            let claims = token_provider.verify_token(&token).map_err(|_| {
                create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired session",
                ))
            })?;

            match blacklist.is_revoked(&hash_token(&token)).await {
                Ok(false) => {}
                Ok(true) => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "SESSION_REVOKED",
                        "Session has been revoked",
                    )));
                }
                Err(e) => {
                    tracing::error!("Session blacklist lookup failed: {}", e);
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            }

            Ok(AuthenticatedUser {
                user_id: claims.sub,
                email: claims.email.clone(),
                role: claims.role,
                expires_at: claims.expires_at(),
                session_token: token,
            })
        })
    }
}

fn role_not_allowed(message: &str) -> ActixError {
    create_api_error(ApiResponse::forbidden("ROLE_NOT_ALLOWED", message))
}

/// Authenticated caller with the founder role.
#[derive(Debug, Clone)]
pub struct FounderUser(pub AuthenticatedUser);

impl FromRequest for FounderUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let user = auth.await?;
            if user.role != UserRole::Founder {
                return Err(role_not_allowed("Only founders can do this"));
            }
            Ok(FounderUser(user))
        })
    }
}

/// Authenticated caller with the vc or angel role.
#[derive(Debug, Clone)]
pub struct InvestorUser(pub AuthenticatedUser);

impl FromRequest for InvestorUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let user = auth.await?;
            if !user.role.is_investor() {
                return Err(role_not_allowed("Only investors can do this"));
            }
            Ok(InvestorUser(user))
        })
    }
}

/// Authenticated caller whose account currently has the admin flag.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth = AuthenticatedUser::from_request(req, payload);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let user = auth.await?;
            let Some(state) = state else {
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            match state.admin_guard.ensure_admin(user.user_id).await {
                Ok(()) => Ok(AdminUser(user)),
                Err(AdminCheckError::NotAdmin) => {
                    tracing::warn!(user_id = %user.user_id, "Admin route refused");
                    Err(create_api_error(ApiResponse::forbidden(
                        "ADMIN_REQUIRED",
                        "Admin privileges required",
                    )))
                }
                Err(AdminCheckError::UserNotFound) => Err(create_api_error(
                    ApiResponse::unauthorized("UNAUTHORIZED", "Account no longer exists"),
                )),
                Err(AdminCheckError::RepositoryError(msg)) => {
                    tracing::error!("Admin lookup failed: {}", msg);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}
