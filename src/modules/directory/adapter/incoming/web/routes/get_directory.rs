use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::directory::application::ports::incoming::use_cases::GetDirectoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DirectoryQuery {
    pub email: String,
}

/// The external VC directory, for emails that unlocked it
#[utoipa::path(
    get,
    path = "/api/directory",
    tag = "directory",
    params(DirectoryQuery),
    responses(
        (status = 200, description = "Directory entries", body = Vec<crate::modules::directory::application::domain::entities::DirectoryEntry>),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 403, description = "Email not submitted for the directory", body = ErrorResponse),
        (status = 502, description = "Directory provider failed", body = ErrorResponse),
    )
)]
#[get("/api/directory")]
pub async fn get_directory_handler(
    query: web::Query<DirectoryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.directory.get.execute(&query.email).await {
        Ok(entries) => ApiResponse::success(entries),
        Err(GetDirectoryError::InvalidEmail(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(GetDirectoryError::EmailNotSubmitted) => ApiResponse::forbidden(
            "EMAIL_NOT_SUBMITTED",
            "Submit your email to access the directory",
        ),
        Err(GetDirectoryError::Unavailable(msg)) => {
            error!("Directory provider failed: {}", msg);
            ApiResponse::bad_gateway("DIRECTORY_UNAVAILABLE", "Directory is temporarily unavailable")
        }
        Err(GetDirectoryError::RepositoryError(msg)) => {
            error!("Failed to check directory access: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
