use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::FounderUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// VCs the caller has unlocked, with contact details and the stored intro template
#[utoipa::path(
    get,
    path = "/api/vcs/unlocked",
    tag = "vcs",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Unlocked VCs", body = Vec<crate::modules::vc::application::domain::entities::UnlockedVc>))
)]
#[get("/api/vcs/unlocked")]
pub async fn list_unlocked_vcs_handler(
    user: FounderUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.vc.list_unlocked.execute(user.0.user_id).await {
        Ok(vcs) => ApiResponse::success(vcs),
        Err(e) => {
            error!(user_id = %user.0.user_id, "Failed to list unlocked VCs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
