use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = crate::auth::application::domain::entities::UserProfile),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn get_user_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::QueryError(e)) => {
            error!(user_id = %user.user_id, "Failed to load profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
