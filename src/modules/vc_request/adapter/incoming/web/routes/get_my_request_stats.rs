use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::InvestorUser;
use crate::modules::vc_request::application::ports::incoming::use_cases::GetMyRequestStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Unlock and intro request counts for the caller's listing
#[utoipa::path(
    get,
    path = "/api/vcs/me/requests",
    tag = "vcs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Request counts", body = crate::modules::vc_request::application::domain::entities::VcRequestStats),
        (status = 404, description = "Caller has no listing", body = ErrorResponse),
    )
)]
#[get("/api/vcs/me/requests")]
pub async fn get_my_request_stats_handler(
    user: InvestorUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.0.user_id;

    match data.vc_request.my_stats.execute(user_id).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetMyRequestStatsError::NoListing) => {
            ApiResponse::not_found("VC_NOT_FOUND", "Create a listing first")
        }
        Err(GetMyRequestStatsError::RepositoryError(msg)) => {
            error!(user_id = %user_id, "Failed to load request stats: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
