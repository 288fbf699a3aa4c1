use std::sync::Arc;

use crate::modules::payment::application::ports::incoming::use_cases::{
    ConfirmPaymentUseCase, CreatePaymentIntentUseCase, ListMyPaymentsUseCase,
};

#[derive(Clone)]
pub struct PaymentUseCases {
    pub create_intent: Arc<dyn CreatePaymentIntentUseCase + Send + Sync>,
    pub confirm: Arc<dyn ConfirmPaymentUseCase + Send + Sync>,
    pub list_mine: Arc<dyn ListMyPaymentsUseCase + Send + Sync>,
}
