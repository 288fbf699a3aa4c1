use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    session_cookie::cleared_session_cookie, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    message: String,
}

/// Revoke the current session and clear the cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(user.session()).await {
        Ok(()) => ApiResponse::success_with_cookie(
            LogoutResponseBody {
                message: "Logged out".to_string(),
            },
            cleared_session_cookie(data.secure_cookies),
        ),
        Err(e) => {
            error!(user_id = %user.user_id, "Logout failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
