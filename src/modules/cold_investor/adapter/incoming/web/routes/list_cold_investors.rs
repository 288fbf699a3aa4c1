use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ColdInvestorListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Cold investor funds with their decision makers.
///
/// Signed-in callers see contact details for the people they unlocked.
#[utoipa::path(
    get,
    path = "/api/cold-investors",
    tag = "cold-investors",
    params(ColdInvestorListQuery),
    responses((status = 200, description = "Page of cold investors"))
)]
#[get("/api/cold-investors")]
pub async fn list_cold_investors_handler(
    viewer: Option<AuthenticatedUser>,
    query: web::Query<ColdInvestorListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.per_page);
    let viewer_email = viewer.map(|user| user.email);

    match data.cold_investor.list.execute(viewer_email, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!("Failed to list cold investors: {}", e);
            ApiResponse::internal_error()
        }
    }
}
