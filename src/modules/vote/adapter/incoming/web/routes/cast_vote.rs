use actix_web::http::header::{HeaderValue, RETRY_AFTER};
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::vote::application::ports::incoming::use_cases::CastVoteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CastVoteRequest {
    pub email: String,
}

/// Vote for a Scout project with an email address
#[utoipa::path(
    post,
    path = "/api/scout/projects/{id}/votes",
    tag = "scout",
    params(("id" = Uuid, Path, description = "Founder id")),
    request_body = CastVoteRequest,
    responses(
        (status = 201, description = "Vote recorded", body = crate::modules::vote::application::domain::entities::VoteStatus),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 409, description = "Already voted", body = ErrorResponse),
        (status = 429, description = "One vote per 24 hours", body = ErrorResponse),
    )
)]
#[post("/api/scout/projects/{id}/votes")]
pub async fn cast_vote_handler(
    path: web::Path<Uuid>,
    req: web::Json<CastVoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.vote.cast.execute(project_id, &req.email).await {
        Ok(status) => ApiResponse::created(status),
        Err(CastVoteError::InvalidEmail(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        Err(CastVoteError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(CastVoteError::AlreadyVoted) => {
            ApiResponse::conflict("ALREADY_VOTED", "This email already voted for this project")
        }
        Err(CastVoteError::RateLimited { retry_after_secs }) => {
            let mut resp = ApiResponse::too_many_requests(
                "VOTE_RATE_LIMITED",
                "Only one vote per email every 24 hours",
            );
            resp.headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));
            resp
        }
        Err(CastVoteError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Failed to cast vote: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
