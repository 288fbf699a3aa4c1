use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequestDto {
    #[schema(example = "ada@startup.io")]
    pub email: String,
    #[schema(example = "launch2024")]
    pub password: String,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    /// founder, vc or angel
    #[schema(example = "founder")]
    pub role: String,
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequestDto,
    responses(
        (status = 201, description = "Account created", body = crate::auth::application::domain::entities::UserProfile),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let request = match RegisterUserRequest::new(req.email, req.password, req.full_name, &req.role)
    {
        Ok(r) => r,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.register.execute(request).await {
        Ok(user) => ApiResponse::created(user),
        Err(RegisterUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        Err(e) => {
            error!("Registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
