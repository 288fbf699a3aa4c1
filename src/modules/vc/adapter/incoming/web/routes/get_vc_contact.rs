use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::FounderUser;
use crate::modules::vc::application::ports::incoming::use_cases::GetVcContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Contact details of a VC the caller has unlocked
#[utoipa::path(
    get,
    path = "/api/vcs/{id}/contact",
    tag = "vcs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "VC id")),
    responses(
        (status = 200, description = "Contact details", body = crate::modules::vc::application::domain::entities::VcContact),
        (status = 403, description = "Not unlocked", body = ErrorResponse),
        (status = 404, description = "Unknown VC", body = ErrorResponse),
    )
)]
#[get("/api/vcs/{id}/contact")]
pub async fn get_vc_contact_handler(
    user: FounderUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let vc_id = path.into_inner();

    match data.vc.get_contact.execute(user.0.user_id, vc_id).await {
        Ok(contact) => ApiResponse::success(contact),
        Err(GetVcContactError::VcNotFound) => ApiResponse::not_found("VC_NOT_FOUND", "VC not found"),
        Err(GetVcContactError::NotUnlocked) => {
            ApiResponse::forbidden("NOT_UNLOCKED", "Unlock this VC to see their contact details")
        }
        Err(GetVcContactError::RepositoryError(msg)) => {
            error!(vc_id = %vc_id, "Failed to load VC contact: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
