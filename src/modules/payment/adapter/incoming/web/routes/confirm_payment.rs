use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::FounderUser;
use crate::modules::payment::application::domain::entities::{Payer, PaymentKind};
use crate::modules::payment::application::ports::incoming::use_cases::ConfirmPaymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Confirm a payment after the client finished checkout
#[utoipa::path(
    post,
    path = "/api/payments/{id}/confirm",
    tag = "payments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Payment intent id")),
    responses(
        (status = 200, description = "Payment completed and fulfilled", body = crate::modules::payment::application::domain::entities::PaymentConfirmation),
        (status = 400, description = "Already processed, failed, not yet completed or already delivered", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Unknown payment", body = ErrorResponse),
        (status = 502, description = "Payment processor failed", body = ErrorResponse),
    )
)]
#[post("/api/payments/{id}/confirm")]
pub async fn confirm_payment_handler(
    user: FounderUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payment_id = path.into_inner();
    let payer = Payer {
        user_id: user.0.user_id,
        email: user.0.email.clone(),
    };

    match data.payment.confirm.execute(payer, &payment_id).await {
        Ok(confirmation) => ApiResponse::success(confirmation),
        Err(ConfirmPaymentError::NotFound) => {
            ApiResponse::not_found("PAYMENT_NOT_FOUND", "Payment not found")
        }
        Err(ConfirmPaymentError::AlreadyProcessed) => ApiResponse::bad_request(
            "PAYMENT_ALREADY_PROCESSED",
            "This payment has already been processed",
        ),
        Err(ConfirmPaymentError::PaymentFailed) => {
            ApiResponse::bad_request("PAYMENT_FAILED", "The payment was canceled")
        }
        Err(ConfirmPaymentError::NotCompleted(status)) => ApiResponse::bad_request(
            "PAYMENT_NOT_COMPLETED",
            &format!("Payment not completed (status: {})", status),
        ),
        Err(ConfirmPaymentError::AlreadyFulfilled(PaymentKind::ProjectVisibility)) => {
            ApiResponse::bad_request("ALREADY_VISIBLE", "Your project is already visible")
        }
        Err(ConfirmPaymentError::AlreadyFulfilled(_)) => {
            ApiResponse::bad_request("ALREADY_UNLOCKED", "You have already unlocked this contact")
        }
        Err(ConfirmPaymentError::ProviderError(msg)) => {
            error!(payment_id = %payment_id, "Payment provider failed on confirm: {}", msg);
            ApiResponse::bad_gateway("PAYMENT_PROVIDER_ERROR", "Payment provider is unavailable")
        }
        Err(ConfirmPaymentError::RepositoryError(msg)) => {
            error!(payment_id = %payment_id, "Failed to confirm payment: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
