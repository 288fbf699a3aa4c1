use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::modules::payment::application::domain::entities::ProcessorIntent;
use crate::modules::payment::application::ports::outgoing::{
    IntentRequest, PaymentGateway, PaymentGatewayError,
};

const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub base_url: String,
}

impl StripeConfig {
    pub fn from_env() -> Self {
        let secret_key = env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY must be set");
        if secret_key.trim().is_empty() {
            panic!("STRIPE_SECRET_KEY must not be empty");
        }
        let base_url = env::var("STRIPE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            secret_key,
            base_url,
        }
    }
}

/// Payment Intents over Stripe's form-encoded REST API.
#[derive(Clone)]
pub struct StripeGateway {
    client: Client,
    config: StripeConfig,
}

impl StripeGateway {
    pub fn new(config: StripeConfig) -> Result<Self, PaymentGatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| PaymentGatewayError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn read_intent(response: reqwest::Response) -> Result<ProcessorIntent, PaymentGatewayError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentGatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::error!(status = status.as_u16(), "Stripe request failed: {}", message);
            return Err(PaymentGatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_intent(&body)
    }
}

#[derive(Debug, Deserialize)]
struct StripeIntent {
    id: String,
    client_secret: Option<String>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

fn parse_intent(body: &str) -> Result<ProcessorIntent, PaymentGatewayError> {
    let intent: StripeIntent = serde_json::from_str(body)
        .map_err(|e| PaymentGatewayError::InvalidResponse(e.to_string()))?;

    Ok(ProcessorIntent {
        id: intent.id,
        client_secret: intent.client_secret,
        status: intent.status.as_str().into(),
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<StripeErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .unwrap_or_else(|| "unknown processor error".to_string())
}

fn intent_form(request: &IntentRequest) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_string(), request.amount_minor.to_string()),
        ("currency".to_string(), request.currency.to_lowercase()),
        (
            "automatic_payment_methods[enabled]".to_string(),
            "true".to_string(),
        ),
        ("metadata[kind]".to_string(), request.kind.as_str().to_string()),
        (
            "metadata[founder_id]".to_string(),
            request.founder_id.to_string(),
        ),
    ];
    if let Some(target_id) = request.target_id {
        form.push(("metadata[target_id]".to_string(), target_id.to_string()));
    }
    form
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(&self, request: IntentRequest) -> Result<ProcessorIntent, PaymentGatewayError> {
        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.config.base_url))
            .bearer_auth(&self.config.secret_key)
            .form(&intent_form(&request))
            .send()
            .await
            .map_err(|e| PaymentGatewayError::Transport(e.to_string()))?;

        Self::read_intent(response).await
    }

    async fn retrieve_intent(&self, intent_id: &str) -> Result<ProcessorIntent, PaymentGatewayError> {
        let response = self
            .client
            .get(format!(
                "{}/v1/payment_intents/{}",
                self.config.base_url, intent_id
            ))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(|e| PaymentGatewayError::Transport(e.to_string()))?;

        Self::read_intent(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::payment::application::domain::entities::{IntentStatus, PaymentKind};
    use uuid::Uuid;

    #[test]
    fn test_parse_intent() {
        let body = r#"{"id":"pi_123","object":"payment_intent","client_secret":"pi_123_secret_abc","status":"requires_payment_method","amount":15000}"#;
        let intent = parse_intent(body).unwrap();

        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.client_secret.as_deref(), Some("pi_123_secret_abc"));
        assert_eq!(
            intent.status,
            IntentStatus::Other("requires_payment_method".to_string())
        );
    }

    #[test]
    fn test_parse_succeeded_intent() {
        let intent = parse_intent(r#"{"id":"pi_1","client_secret":null,"status":"succeeded"}"#).unwrap();
        assert_eq!(intent.status, IntentStatus::Succeeded);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_intent("<html>"),
            Err(PaymentGatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_error_message() {
        let body = r#"{"error":{"type":"invalid_request_error","message":"No such payment_intent: 'pi_x'"}}"#;
        assert_eq!(error_message(body), "No such payment_intent: 'pi_x'");
        assert_eq!(error_message("oops"), "unknown processor error");
    }

    #[test]
    fn test_intent_form_carries_metadata() {
        let founder_id = Uuid::new_v4();
        let target_id = Uuid::new_v4();
        let form = intent_form(&IntentRequest {
            amount_minor: 4_900,
            currency: "USD".to_string(),
            kind: PaymentKind::VcUnlock,
            founder_id,
            target_id: Some(target_id),
        });

        assert!(form.contains(&("amount".to_string(), "4900".to_string())));
        assert!(form.contains(&("currency".to_string(), "usd".to_string())));
        assert!(form.contains(&("metadata[kind]".to_string(), "vc_unlock".to_string())));
        assert!(form.contains(&("metadata[target_id]".to_string(), target_id.to_string())));
    }
}
