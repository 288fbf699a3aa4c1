use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::email_gate::application::ports::incoming::use_cases::CheckAccessError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AccessQuery {
    pub email: String,
    pub source: String,
}

/// Whether an email has unlocked a gated source
#[utoipa::path(
    get,
    path = "/api/email-gate/access",
    tag = "email-gate",
    params(AccessQuery),
    responses(
        (status = 200, description = "Access flag", body = crate::modules::email_gate::application::domain::entities::EmailAccess),
        (status = 400, description = "Invalid email or source", body = ErrorResponse),
    )
)]
#[get("/api/email-gate/access")]
pub async fn check_access_handler(
    query: web::Query<AccessQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.email_gate.check.execute(&query.email, &query.source).await {
        Ok(access) => ApiResponse::success(access),
        Err(CheckAccessError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        Err(CheckAccessError::RepositoryError(msg)) => {
            error!("Failed to check email access: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
