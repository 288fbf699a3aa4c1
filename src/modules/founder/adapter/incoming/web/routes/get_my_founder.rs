use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::FounderUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller's founder profile, created empty on first access
#[utoipa::path(
    get,
    path = "/api/founders/me",
    tag = "founders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Founder profile", body = crate::modules::founder::application::domain::entities::FounderProfile),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Caller is not a founder", body = ErrorResponse),
    )
)]
#[get("/api/founders/me")]
pub async fn get_my_founder_handler(
    user: FounderUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.0.user_id;

    match data.founder.get_mine.execute(user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => {
            error!(user_id = %user_id, "Failed to load founder profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
