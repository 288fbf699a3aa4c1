use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminVcListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/admin/vcs")]
pub async fn admin_list_vcs_handler(
    _admin: AdminUser,
    query: web::Query<AdminVcListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.per_page);

    match data.vc.list_all.execute(page).await {
        Ok(listings) => ApiResponse::success(listings),
        Err(e) => {
            error!("Failed to list VCs for admin: {}", e);
            ApiResponse::internal_error()
        }
    }
}
