use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/admin/users")]
pub async fn list_users_handler(
    _admin: AdminUser,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.per_page);

    match data.auth.list_users.execute(page).await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!("Failed to list users: {}", e);
            ApiResponse::internal_error()
        }
    }
}
