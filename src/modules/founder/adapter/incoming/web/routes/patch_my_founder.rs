use actix_web::{patch, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::FounderUser;
use crate::modules::founder::application::domain::entities::FounderPatch;
use crate::modules::founder::application::ports::incoming::use_cases::PatchMyFounderError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edit the caller's founder profile. Omitted fields are kept, `null` clears optional ones.
#[utoipa::path(
    patch,
    path = "/api/founders/me",
    tag = "founders",
    security(("bearer_auth" = [])),
    request_body = FounderPatch,
    responses(
        (status = 200, description = "Updated profile", body = crate::modules::founder::application::domain::entities::FounderProfile),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 403, description = "Caller is not a founder", body = ErrorResponse),
    )
)]
#[patch("/api/founders/me")]
pub async fn patch_my_founder_handler(
    user: FounderUser,
    req: web::Json<FounderPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.0.user_id;

    match data.founder.patch_mine.execute(user_id, req.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(PatchMyFounderError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(PatchMyFounderError::RepositoryError(msg)) => {
            error!(user_id = %user_id, "Founder patch failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
