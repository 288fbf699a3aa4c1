use async_trait::async_trait;
use std::fmt;

use crate::modules::payment::application::domain::entities::{Payer, PaymentIntent, PaymentTarget};

#[derive(Debug, Clone)]
pub enum CreatePaymentIntentError {
    VcNotFound,
    DecisionMakerNotFound,
    IntroNotOffered,
    AlreadyUnlocked,
    AlreadyVisible,
    ProviderError(String),
    RepositoryError(String),
}

impl fmt::Display for CreatePaymentIntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatePaymentIntentError::VcNotFound => write!(f, "vc not found"),
            CreatePaymentIntentError::DecisionMakerNotFound => write!(f, "decision maker not found"),
            CreatePaymentIntentError::IntroNotOffered => write!(f, "vc does not offer intros"),
            CreatePaymentIntentError::AlreadyUnlocked => write!(f, "already unlocked"),
            CreatePaymentIntentError::AlreadyVisible => write!(f, "project already visible"),
            CreatePaymentIntentError::ProviderError(msg) => write!(f, "payment provider error: {}", msg),
            CreatePaymentIntentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreatePaymentIntentUseCase: Send + Sync {
    async fn execute(
        &self,
        payer: Payer,
        target: PaymentTarget,
    ) -> Result<PaymentIntent, CreatePaymentIntentError>;
}
