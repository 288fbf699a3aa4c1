use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::payment::application::domain::entities::{NewPayment, Payment, PaymentTarget};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentRepositoryError {
    #[error("payment already recorded")]
    AlreadyExists,
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Stores a new `pending` payment.
    async fn insert(&self, payment: NewPayment) -> Result<Payment, PaymentRepositoryError>;

    async fn find_by_id(&self, payment_id: &str) -> Result<Option<Payment>, PaymentRepositoryError>;

    /// Newest `pending` payment the founder holds for exactly this target.
    async fn find_pending(
        &self,
        founder_id: Uuid,
        target: &PaymentTarget,
    ) -> Result<Option<Payment>, PaymentRepositoryError>;

    /// Moves a pending payment to `completed`. Returns false when it was no longer pending.
    async fn mark_completed(
        &self,
        payment_id: &str,
        intro_template: Option<String>,
    ) -> Result<bool, PaymentRepositoryError>;

    /// Moves a pending payment to `failed`. Returns false when it was no longer pending.
    async fn mark_failed(&self, payment_id: &str) -> Result<bool, PaymentRepositoryError>;

    /// Newest first.
    async fn list_for_founder(&self, founder_id: Uuid) -> Result<Vec<Payment>, PaymentRepositoryError>;
}
