use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::vc::application::ports::incoming::use_cases::ReviewPendingChangesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReviewChangesRequest {
    pub approve: bool,
}

/// Approve (apply) or reject (discard) an investor's pending listing changes
#[utoipa::path(
    post,
    path = "/api/admin/vcs/{id}/review",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "VC id")),
    request_body = ReviewChangesRequest,
    responses(
        (status = 200, description = "Listing after review", body = crate::modules::vc::application::domain::entities::VcListing),
        (status = 400, description = "Nothing pending", body = ErrorResponse),
        (status = 403, description = "Admin required", body = ErrorResponse),
        (status = 404, description = "Unknown VC", body = ErrorResponse),
    )
)]
#[post("/api/admin/vcs/{id}/review")]
pub async fn admin_review_changes_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewChangesRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let vc_id = path.into_inner();

    match data.vc.review_pending.execute(vc_id, req.approve).await {
        Ok(listing) => ApiResponse::success(listing),
        Err(ReviewPendingChangesError::NotFound) => {
            ApiResponse::not_found("VC_NOT_FOUND", "VC not found")
        }
        Err(ReviewPendingChangesError::NoPendingChanges) => {
            ApiResponse::bad_request("NO_PENDING_CHANGES", "This listing has no changes awaiting review")
        }
        Err(ReviewPendingChangesError::RepositoryError(msg)) => {
            error!(vc_id = %vc_id, "Failed to review VC changes: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
