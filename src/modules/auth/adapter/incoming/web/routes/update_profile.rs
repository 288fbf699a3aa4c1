use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::update_profile::{UpdateUserError, UpdateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[schema(example = "Ada King")]
    pub full_name: String,
}

/// Update the caller's display name
#[utoipa::path(
    patch,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated profile", body = crate::auth::application::domain::entities::UserProfile),
        (status = 400, description = "Invalid name", body = ErrorResponse),
    )
)]
#[patch("/api/auth/me")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = UpdateUserInput {
        user_id: UserId::from(user.user_id),
        full_name: req.into_inner().full_name,
    };

    match data.auth.update_profile.execute(input).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(UpdateUserError::InvalidFullName(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Profile update failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
