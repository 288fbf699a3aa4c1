pub mod confirm_payment;
pub mod create_payment_intent;
pub mod list_my_payments;

pub use confirm_payment::{ConfirmPaymentError, ConfirmPaymentUseCase};
pub use create_payment_intent::{CreatePaymentIntentError, CreatePaymentIntentUseCase};
pub use list_my_payments::{ListMyPaymentsError, ListMyPaymentsUseCase};
