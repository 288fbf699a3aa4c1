use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::vc::application::ports::incoming::use_cases::GetVcError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public card for one VC
#[utoipa::path(
    get,
    path = "/api/vcs/{id}",
    tag = "vcs",
    params(("id" = Uuid, Path, description = "VC id")),
    responses(
        (status = 200, description = "VC card", body = crate::modules::vc::application::domain::entities::VcCard),
        (status = 404, description = "Unknown VC", body = ErrorResponse),
    )
)]
#[get("/api/vcs/{id}")]
pub async fn get_vc_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let vc_id = path.into_inner();

    match data.vc.get.execute(vc_id).await {
        Ok(card) => ApiResponse::success(card),
        Err(GetVcError::NotFound) => ApiResponse::not_found("VC_NOT_FOUND", "VC not found"),
        Err(GetVcError::QueryError(msg)) => {
            error!(vc_id = %vc_id, "Failed to load VC: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
