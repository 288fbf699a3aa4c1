use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    session_cookie::cleared_session_cookie, AuthenticatedUser,
};
use crate::auth::application::use_cases::delete_account::DeleteAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct DeletedAccount {
    deleted: bool,
}

/// Permanently delete the caller's account
#[utoipa::path(
    delete,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[delete("/api/auth/me")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.delete_account.execute(user.session()).await {
        Ok(()) => ApiResponse::success_with_cookie(
            DeletedAccount { deleted: true },
            cleared_session_cookie(data.secure_cookies),
        ),
        Err(DeleteAccountError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteAccountError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Account deletion failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
