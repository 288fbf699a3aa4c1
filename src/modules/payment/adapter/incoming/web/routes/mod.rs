pub mod confirm_payment;
pub mod create_payment_intent;
pub mod list_my_payments;

pub use confirm_payment::confirm_payment_handler;
pub use create_payment_intent::{create_payment_intent_handler, CreatePaymentIntentRequest};
pub use list_my_payments::list_my_payments_handler;
