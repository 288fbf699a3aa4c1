use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::cold_investor::application::domain::entities::NewColdInvestor;
use crate::modules::cold_investor::application::ports::incoming::use_cases::CreateColdInvestorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add a cold investor fund
#[utoipa::path(
    post,
    path = "/api/admin/cold-investors",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = NewColdInvestor,
    responses(
        (status = 201, description = "Fund created", body = crate::modules::cold_investor::application::domain::entities::ColdInvestor),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Admin required", body = ErrorResponse),
    )
)]
#[post("/api/admin/cold-investors")]
pub async fn admin_create_cold_investor_handler(
    _admin: AdminUser,
    req: web::Json<NewColdInvestor>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .cold_investor
        .create_investor
        .execute(req.into_inner())
        .await
    {
        Ok(investor) => ApiResponse::created(investor),
        Err(CreateColdInvestorError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(CreateColdInvestorError::RepositoryError(msg)) => {
            error!("Failed to create cold investor: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
