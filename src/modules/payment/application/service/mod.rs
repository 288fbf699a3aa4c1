pub mod confirm_payment_service;
pub mod create_payment_intent_service;
pub mod list_my_payments_service;
pub mod payment_ports;

pub use confirm_payment_service::ConfirmPaymentService;
pub use create_payment_intent_service::CreatePaymentIntentService;
pub use list_my_payments_service::ListMyPaymentsService;
pub use payment_ports::PaymentPorts;
