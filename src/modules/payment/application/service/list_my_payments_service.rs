use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::founder::application::ports::outgoing::FounderRepository;
use crate::modules::payment::application::domain::entities::Payment;
use crate::modules::payment::application::ports::incoming::use_cases::{
    ListMyPaymentsError, ListMyPaymentsUseCase,
};
use crate::modules::payment::application::ports::outgoing::PaymentRepository;

pub struct ListMyPaymentsService<R>
where
    R: PaymentRepository,
{
    payments: R,
    founders: Arc<dyn FounderRepository + Send + Sync>,
}

impl<R> ListMyPaymentsService<R>
where
    R: PaymentRepository,
{
    pub fn new(payments: R, founders: Arc<dyn FounderRepository + Send + Sync>) -> Self {
        Self { payments, founders }
    }
}

#[async_trait]
impl<R> ListMyPaymentsUseCase for ListMyPaymentsService<R>
where
    R: PaymentRepository + Send + Sync,
{
    async fn execute(&self, founder_user_id: Uuid) -> Result<Vec<Payment>, ListMyPaymentsError> {
        let founder = self
            .founders
            .ensure_for_user(founder_user_id)
            .await
            .map_err(|e| ListMyPaymentsError::RepositoryError(e.to_string()))?;

        self.payments
            .list_for_founder(founder.id)
            .await
            .map_err(|e| ListMyPaymentsError::RepositoryError(e.to_string()))
    }
}
