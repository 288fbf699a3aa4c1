use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::founder::application::domain::entities::ScoutSort;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ScoutListQuery {
    /// `votes` (default) or `newest`
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Visible founder projects with their vote counts
#[utoipa::path(
    get,
    path = "/api/scout/projects",
    tag = "scout",
    params(ScoutListQuery),
    responses(
        (status = 200, description = "Page of Scout projects"),
        (status = 400, description = "Unknown sort", body = ErrorResponse),
    )
)]
#[get("/api/scout/projects")]
pub async fn list_scout_projects_handler(
    query: web::Query<ScoutListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let sort = match query.sort.as_deref() {
        None => ScoutSort::default(),
        Some(raw) => match raw.parse::<ScoutSort>() {
            Ok(sort) => sort,
            Err(msg) => return ApiResponse::bad_request("INVALID_QUERY", &msg),
        },
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.founder.list_scout.execute(sort, page).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => {
            error!("Failed to list scout projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
