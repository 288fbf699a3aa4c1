use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::InvestorUser;
use crate::modules::vc::application::ports::incoming::use_cases::GetMyVcError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's own listing, including contact details and any pending changes
#[utoipa::path(
    get,
    path = "/api/vcs/me",
    tag = "vcs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own listing", body = crate::modules::vc::application::domain::entities::VcListing),
        (status = 404, description = "No listing yet", body = ErrorResponse),
    )
)]
#[get("/api/vcs/me")]
pub async fn get_my_vc_handler(user: InvestorUser, data: web::Data<AppState>) -> impl Responder {
    let user_id = user.0.user_id;

    match data.vc.get_mine.execute(user_id).await {
        Ok(listing) => ApiResponse::success(listing),
        Err(GetMyVcError::NotFound) => {
            ApiResponse::not_found("VC_NOT_FOUND", "You have no VC listing yet")
        }
        Err(GetMyVcError::QueryError(msg)) => {
            error!(user_id = %user_id, "Failed to load own VC listing: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
