use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::vc::application::domain::entities::VcFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct VcListQuery {
    #[serde(default)]
    pub verified_only: bool,
    pub sector: Option<String>,
    pub stage: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Public VC cards. Contact details are never included.
#[utoipa::path(
    get,
    path = "/api/vcs",
    tag = "vcs",
    params(VcListQuery),
    responses((status = 200, description = "Page of VC cards"))
)]
#[get("/api/vcs")]
pub async fn list_vcs_handler(
    query: web::Query<VcListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page);
    let filter = VcFilter {
        verified_only: query.verified_only,
        sector: query.sector,
        stage: query.stage,
        search: query.search,
    };

    match data.vc.list.execute(filter, page).await {
        Ok(cards) => ApiResponse::success(cards),
        Err(e) => {
            error!("Failed to list VCs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
