use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::FounderUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller's payments, newest first
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "payments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Payments", body = Vec<crate::modules::payment::application::domain::entities::Payment>),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Caller is not a founder", body = ErrorResponse),
    )
)]
#[get("/api/payments")]
pub async fn list_my_payments_handler(
    user: FounderUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.0.user_id;

    match data.payment.list_mine.execute(user_id).await {
        Ok(payments) => ApiResponse::success(payments),
        Err(e) => {
            error!(user_id = %user_id, "Failed to list payments: {}", e);
            ApiResponse::internal_error()
        }
    }
}
