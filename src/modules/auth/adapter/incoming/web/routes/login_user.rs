use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::session_cookie::session_cookie;
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ada@startup.io")]
    pub email: String,
    #[schema(example = "launch2024")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session token, also set as the `session` cookie
    session_token: String,
    expires_at: DateTime<Utc>,
    user: UserProfile,
}

/// User login
///
/// Verifies credentials, sets the HttpOnly `session` cookie and returns the token for non-browser clients.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.login.execute(req.into_inner()).await {
        Ok(res) => {
            let max_age = (res.expires_at - Utc::now()).num_seconds().max(0);
            let cookie = session_cookie(res.session_token.clone(), max_age, data.secure_cookies);

            ApiResponse::success_with_cookie(
                LoginResponse {
                    session_token: res.session_token,
                    expires_at: res.expires_at,
                    user: res.user,
                },
                cookie,
            )
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(e) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
