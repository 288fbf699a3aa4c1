use actix_web::{patch, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::InvestorUser;
use crate::modules::vc::application::domain::entities::VcChanges;
use crate::modules::vc::application::ports::incoming::use_cases::PatchMyVcError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Submit changes to the caller's listing. They go live after admin approval.
#[utoipa::path(
    patch,
    path = "/api/vcs/me",
    tag = "vcs",
    security(("bearer_auth" = [])),
    request_body = VcChanges,
    responses(
        (status = 200, description = "Listing with the changes pending review", body = crate::modules::vc::application::domain::entities::VcListing),
        (status = 400, description = "Invalid changes", body = ErrorResponse),
        (status = 404, description = "No listing yet", body = ErrorResponse),
    )
)]
#[patch("/api/vcs/me")]
pub async fn patch_my_vc_handler(
    user: InvestorUser,
    req: web::Json<VcChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.0.user_id;

    match data.vc.patch_mine.execute(user_id, req.into_inner()).await {
        Ok(listing) => ApiResponse::success(listing),
        Err(PatchMyVcError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        Err(PatchMyVcError::NotFound) => {
            ApiResponse::not_found("VC_NOT_FOUND", "You have no VC listing yet")
        }
        Err(PatchMyVcError::RepositoryError(msg)) => {
            error!(user_id = %user_id, "Failed to store VC changes: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
