use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::cold_investor::application::domain::entities::NewDecisionMaker;
use crate::modules::cold_investor::application::ports::incoming::use_cases::CreateDecisionMakerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add a decision maker to a cold investor fund
#[utoipa::path(
    post,
    path = "/api/admin/cold-investors/{id}/decision-makers",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Cold investor id")),
    request_body = NewDecisionMaker,
    responses(
        (status = 201, description = "Decision maker created", body = crate::modules::cold_investor::application::domain::entities::DecisionMakerView),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Unknown fund", body = ErrorResponse),
    )
)]
#[post("/api/admin/cold-investors/{id}/decision-makers")]
pub async fn admin_create_decision_maker_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<NewDecisionMaker>,
    data: web::Data<AppState>,
) -> impl Responder {
    let investor_id = path.into_inner();

    match data
        .cold_investor
        .create_decision_maker
        .execute(investor_id, req.into_inner())
        .await
    {
        Ok(view) => ApiResponse::created(view),
        Err(CreateDecisionMakerError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(CreateDecisionMakerError::InvestorNotFound) => {
            ApiResponse::not_found("COLD_INVESTOR_NOT_FOUND", "Cold investor not found")
        }
        Err(CreateDecisionMakerError::RepositoryError(msg)) => {
            error!(cold_investor_id = %investor_id, "Failed to create decision maker: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
