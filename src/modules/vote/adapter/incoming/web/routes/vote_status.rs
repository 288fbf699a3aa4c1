use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::vote::application::ports::incoming::use_cases::VoteStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct VoterQuery {
    pub email: String,
}

/// Whether an email has voted for a project, plus the current count
#[utoipa::path(
    get,
    path = "/api/scout/projects/{id}/votes",
    tag = "scout",
    params(("id" = Uuid, Path, description = "Founder id"), VoterQuery),
    responses(
        (status = 200, description = "Vote status", body = crate::modules::vote::application::domain::entities::VoteStatus),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[get("/api/scout/projects/{id}/votes")]
pub async fn vote_status_handler(
    path: web::Path<Uuid>,
    query: web::Query<VoterQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.vote.status.execute(project_id, &query.email).await {
        Ok(status) => ApiResponse::success(status),
        Err(VoteStatusError::InvalidEmail(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        Err(VoteStatusError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(VoteStatusError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Failed to load vote status: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
