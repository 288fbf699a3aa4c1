use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::payment::application::domain::entities::{PaymentKind, ProcessorIntent};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentGatewayError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("processor returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected processor response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntentRequest {
    /// Smallest currency unit.
    pub amount_minor: i64,
    pub currency: String,
    pub kind: PaymentKind,
    pub founder_id: Uuid,
    pub target_id: Option<Uuid>,
}

/// Card processor holding the money movement.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(&self, request: IntentRequest) -> Result<ProcessorIntent, PaymentGatewayError>;

    async fn retrieve_intent(&self, intent_id: &str) -> Result<ProcessorIntent, PaymentGatewayError>;
}
