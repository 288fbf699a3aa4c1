pub mod intro_template_generator;
pub mod payment_gateway;
pub mod payment_repository;

pub use intro_template_generator::{IntroTemplateError, IntroTemplateGenerator};
pub use payment_gateway::{IntentRequest, PaymentGateway, PaymentGatewayError};
pub use payment_repository::{PaymentRepository, PaymentRepositoryError};
