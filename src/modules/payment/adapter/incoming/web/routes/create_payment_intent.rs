use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::FounderUser;
use crate::modules::payment::application::domain::entities::{Payer, PaymentKind, PaymentTarget};
use crate::modules::payment::application::ports::incoming::use_cases::CreatePaymentIntentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub kind: PaymentKind,
    pub vc_id: Option<Uuid>,
    pub decision_maker_id: Option<Uuid>,
}

/// Start a payment with the card processor
#[utoipa::path(
    post,
    path = "/api/payments/intents",
    tag = "payments",
    security(("bearer_auth" = [])),
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 201, description = "Intent created", body = crate::modules::payment::application::domain::entities::PaymentIntent),
        (status = 400, description = "Missing target, already unlocked or already visible", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Caller is not a founder", body = ErrorResponse),
        (status = 404, description = "Unknown VC or decision maker", body = ErrorResponse),
        (status = 502, description = "Payment processor failed", body = ErrorResponse),
    )
)]
#[post("/api/payments/intents")]
pub async fn create_payment_intent_handler(
    user: FounderUser,
    req: web::Json<CreatePaymentIntentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.0.user_id;
    let req = req.into_inner();

    let target = match PaymentTarget::from_parts(req.kind, req.vc_id, req.decision_maker_id) {
        Ok(target) => target,
        Err(msg) => return ApiResponse::bad_request("VALIDATION_ERROR", &msg),
    };
    let payer = Payer {
        user_id,
        email: user.0.email.clone(),
    };

    match data.payment.create_intent.execute(payer, target).await {
        Ok(intent) => ApiResponse::created(intent),
        Err(CreatePaymentIntentError::VcNotFound) => {
            ApiResponse::not_found("VC_NOT_FOUND", "VC not found")
        }
        Err(CreatePaymentIntentError::DecisionMakerNotFound) => {
            ApiResponse::not_found("DECISION_MAKER_NOT_FOUND", "Decision maker not found")
        }
        Err(CreatePaymentIntentError::IntroNotOffered) => {
            ApiResponse::bad_request("INTRO_NOT_OFFERED", "This VC does not offer introductions")
        }
        Err(CreatePaymentIntentError::AlreadyUnlocked) => {
            warn!(user_id = %user_id, kind = %req.kind, "Duplicate unlock attempt");
            ApiResponse::bad_request("ALREADY_UNLOCKED", "You have already unlocked this contact")
        }
        Err(CreatePaymentIntentError::AlreadyVisible) => {
            ApiResponse::bad_request("ALREADY_VISIBLE", "Your project is already visible")
        }
        Err(CreatePaymentIntentError::ProviderError(msg)) => {
            error!(user_id = %user_id, "Payment provider failed to create intent: {}", msg);
            ApiResponse::bad_gateway("PAYMENT_PROVIDER_ERROR", "Payment provider is unavailable")
        }
        Err(CreatePaymentIntentError::RepositoryError(msg)) => {
            error!(user_id = %user_id, "Failed to create payment intent: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::payment::application::domain::entities::PaymentIntent;
    use crate::modules::payment::application::ports::incoming::use_cases::CreatePaymentIntentUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{auth_app_data, bearer};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockCreateIntent {
        error: Option<CreatePaymentIntentError>,
        seen: Arc<Mutex<Option<(Payer, PaymentTarget)>>>,
    }

    #[async_trait]
    impl CreatePaymentIntentUseCase for MockCreateIntent {
        async fn execute(
            &self,
            payer: Payer,
            target: PaymentTarget,
        ) -> Result<PaymentIntent, CreatePaymentIntentError> {
            *self.seen.lock().unwrap() = Some((payer, target));
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(PaymentIntent {
                    payment_id: "pi_123".to_string(),
                    client_secret: "pi_123_secret".to_string(),
                    amount: 150,
                    currency: "usd".to_string(),
                }),
            }
        }
    }

    async fn call(
        mock: MockCreateIntent,
        role: UserRole,
        body: Value,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_create_payment_intent(mock)
            .build();
        let (tokens, blacklist) = auth_app_data();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .app_data(blacklist)
                .service(create_payment_intent_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/payments/intents")
            .insert_header(bearer(Uuid::new_v4(), role))
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_creates_vc_unlock_intent() {
        let mock = MockCreateIntent::default();
        let vc_id = Uuid::new_v4();
        let resp = call(
            mock.clone(),
            UserRole::Founder,
            json!({"kind": "vc_unlock", "vcId": vc_id}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["paymentId"], "pi_123");
        assert_eq!(body["data"]["clientSecret"], "pi_123_secret");

        let (payer, target) = mock.seen.lock().unwrap().clone().unwrap();
        assert_eq!(payer.email, "founder@example.com");
        assert_eq!(target, PaymentTarget::VcUnlock { vc_id });
    }

    #[actix_web::test]
    async fn test_missing_target_id() {
        let mock = MockCreateIntent::default();
        let resp = call(mock.clone(), UserRole::Founder, json!({"kind": "intro_request"})).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(mock.seen.lock().unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_unknown_kind() {
        let resp = call(
            MockCreateIntent::default(),
            UserRole::Founder,
            json!({"kind": "gold_membership"}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_already_unlocked() {
        let mock = MockCreateIntent {
            error: Some(CreatePaymentIntentError::AlreadyUnlocked),
            ..Default::default()
        };
        let resp = call(
            mock,
            UserRole::Founder,
            json!({"kind": "vc_unlock", "vcId": Uuid::new_v4()}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ALREADY_UNLOCKED");
    }

    #[actix_web::test]
    async fn test_provider_error_is_502() {
        let mock = MockCreateIntent {
            error: Some(CreatePaymentIntentError::ProviderError("timeout".to_string())),
            ..Default::default()
        };
        let resp = call(mock, UserRole::Founder, json!({"kind": "project_visibility"})).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PAYMENT_PROVIDER_ERROR");
    }

    #[actix_web::test]
    async fn test_investor_cannot_pay() {
        let resp = call(
            MockCreateIntent::default(),
            UserRole::Vc,
            json!({"kind": "project_visibility"}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
