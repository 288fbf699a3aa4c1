use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::vc::application::ports::incoming::use_cases::VerifyVcError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyVcRequest {
    pub is_verified: bool,
}

/// Set or clear the verified badge on a listing
#[utoipa::path(
    patch,
    path = "/api/admin/vcs/{id}/verify",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "VC id")),
    request_body = VerifyVcRequest,
    responses(
        (status = 200, description = "Updated listing", body = crate::modules::vc::application::domain::entities::VcListing),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Admin required", body = ErrorResponse),
        (status = 404, description = "Unknown VC", body = ErrorResponse),
    )
)]
#[patch("/api/admin/vcs/{id}/verify")]
pub async fn admin_verify_vc_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<VerifyVcRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let vc_id = path.into_inner();

    match data.vc.verify.execute(vc_id, req.is_verified).await {
        Ok(listing) => {
            tracing::info!(admin_id = %admin.0.user_id, vc_id = %vc_id, "Admin changed verification");
            ApiResponse::success(listing)
        }
        Err(VerifyVcError::NotFound) => ApiResponse::not_found("VC_NOT_FOUND", "VC not found"),
        Err(VerifyVcError::RepositoryError(msg)) => {
            error!(vc_id = %vc_id, "Failed to change verification: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
