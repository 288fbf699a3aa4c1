use serde::Serialize;
use utoipa::ToSchema;

/// `{success: true, data}` envelope
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{success: false, error}` envelope returned by every failing route
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `ALREADY_UNLOCKED`
    #[schema(example = "VC_NOT_FOUND")]
    pub code: String,

    #[schema(example = "VC not found")]
    pub message: String,
}
