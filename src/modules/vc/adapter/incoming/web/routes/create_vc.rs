use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::InvestorUser;
use crate::modules::vc::application::domain::entities::NewVc;
use crate::modules::vc::application::ports::incoming::use_cases::CreateVcError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create the caller's VC listing (one per investor)
#[utoipa::path(
    post,
    path = "/api/vcs",
    tag = "vcs",
    security(("bearer_auth" = [])),
    request_body = NewVc,
    responses(
        (status = 201, description = "Listing created", body = crate::modules::vc::application::domain::entities::VcListing),
        (status = 400, description = "Invalid listing", body = ErrorResponse),
        (status = 403, description = "Caller is not an investor", body = ErrorResponse),
        (status = 409, description = "Listing already exists", body = ErrorResponse),
    )
)]
#[post("/api/vcs")]
pub async fn create_vc_handler(
    user: InvestorUser,
    req: web::Json<NewVc>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.0.user_id;

    match data.vc.create.execute(user_id, req.into_inner()).await {
        Ok(listing) => ApiResponse::created(listing),
        Err(CreateVcError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        Err(CreateVcError::AlreadyExists) => {
            ApiResponse::conflict("VC_ALREADY_EXISTS", "You already have a VC listing")
        }
        Err(CreateVcError::RepositoryError(msg)) => {
            error!(user_id = %user_id, "Failed to create VC listing: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
