use async_trait::async_trait;
use std::fmt;

use crate::modules::payment::application::domain::entities::{
    Payer, PaymentConfirmation, PaymentKind,
};

#[derive(Debug, Clone)]
pub enum ConfirmPaymentError {
    NotFound,
    AlreadyProcessed,
    PaymentFailed,
    /// Carries the processor status, e.g. `requires_payment_method`.
    NotCompleted(String),
    /// Another payment already delivered this purchase; this one is closed as failed.
    AlreadyFulfilled(PaymentKind),
    ProviderError(String),
    RepositoryError(String),
}

impl fmt::Display for ConfirmPaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmPaymentError::NotFound => write!(f, "payment not found"),
            ConfirmPaymentError::AlreadyProcessed => write!(f, "payment already processed"),
            ConfirmPaymentError::PaymentFailed => write!(f, "payment failed"),
            ConfirmPaymentError::NotCompleted(status) => {
                write!(f, "payment not completed (status: {})", status)
            }
            ConfirmPaymentError::AlreadyFulfilled(kind) => {
                write!(f, "{} already fulfilled by another payment", kind)
            }
            ConfirmPaymentError::ProviderError(msg) => write!(f, "payment provider error: {}", msg),
            ConfirmPaymentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ConfirmPaymentUseCase: Send + Sync {
    async fn execute(
        &self,
        payer: Payer,
        payment_id: &str,
    ) -> Result<PaymentConfirmation, ConfirmPaymentError>;
}
