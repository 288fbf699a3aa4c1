use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::email_gate::application::ports::incoming::use_cases::SubmitEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitEmailRequest {
    pub email: String,
    pub source: String,
}

/// Record an email for a gated source
#[utoipa::path(
    post,
    path = "/api/email-gate",
    tag = "email-gate",
    request_body = SubmitEmailRequest,
    responses(
        (status = 200, description = "Access granted", body = crate::modules::email_gate::application::domain::entities::EmailAccess),
        (status = 400, description = "Invalid email or source", body = ErrorResponse),
    )
)]
#[post("/api/email-gate")]
pub async fn submit_email_handler(
    req: web::Json<SubmitEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.email_gate.submit.execute(&req.email, &req.source).await {
        Ok(access) => ApiResponse::success(access),
        Err(SubmitEmailError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        Err(SubmitEmailError::RepositoryError(msg)) => {
            error!("Failed to record email submission: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
