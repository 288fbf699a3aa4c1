use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::founder::application::ports::incoming::use_cases::GetScoutProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Single visible Scout project
#[utoipa::path(
    get,
    path = "/api/scout/projects/{id}",
    tag = "scout",
    params(("id" = Uuid, Path, description = "Founder id")),
    responses(
        (status = 200, description = "Scout project", body = crate::modules::founder::application::domain::entities::ScoutProject),
        (status = 404, description = "Missing or not visible", body = ErrorResponse),
    )
)]
#[get("/api/scout/projects/{id}")]
pub async fn get_scout_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.founder.get_scout.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetScoutProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetScoutProjectError::QueryError(msg)) => {
            error!(project_id = %project_id, "Failed to load scout project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::founder::application::domain::entities::ScoutProject;
    use crate::modules::founder::application::ports::incoming::use_cases::GetScoutProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::founder_profile;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    struct MockGet {
        result: Result<ScoutProject, GetScoutProjectError>,
    }

    #[async_trait]
    impl GetScoutProjectUseCase for MockGet {
        async fn execute(&self, _id: Uuid) -> Result<ScoutProject, GetScoutProjectError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<ScoutProject, GetScoutProjectError>) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_get_scout_project(MockGet { result })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_scout_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/scout/projects/{}", Uuid::new_v4()))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_get_scout_project_success() {
        let resp = call(Ok(ScoutProject::from_profile(founder_profile(true), 3))).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["voteCount"], 3);
        assert!(body["data"].get("userId").is_none());
    }

    #[actix_web::test]
    async fn test_get_scout_project_not_found() {
        let resp = call(Err(GetScoutProjectError::NotFound)).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_invalid_uuid_path() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_scout_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/scout/projects/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
