use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::vote_status::VoterQuery;
use crate::api::schemas::ErrorResponse;
use crate::modules::vote::application::ports::incoming::use_cases::RemoveVoteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Withdraw a vote
#[utoipa::path(
    delete,
    path = "/api/scout/projects/{id}/votes",
    tag = "scout",
    params(("id" = Uuid, Path, description = "Founder id"), VoterQuery),
    responses(
        (status = 200, description = "Vote removed", body = crate::modules::vote::application::domain::entities::VoteStatus),
        (status = 404, description = "No vote for this email", body = ErrorResponse),
    )
)]
#[delete("/api/scout/projects/{id}/votes")]
pub async fn remove_vote_handler(
    path: web::Path<Uuid>,
    query: web::Query<VoterQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.vote.remove.execute(project_id, &query.email).await {
        Ok(status) => ApiResponse::success(status),
        Err(RemoveVoteError::InvalidEmail(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        Err(RemoveVoteError::VoteNotFound) => {
            ApiResponse::not_found("VOTE_NOT_FOUND", "No vote found for this email")
        }
        Err(RemoveVoteError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Failed to remove vote: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
