pub mod openai_intro_generator;
pub mod payment_repository_postgres;
pub mod sea_orm_entity;
pub mod stripe_gateway;

pub use openai_intro_generator::{OpenAiConfig, OpenAiIntroGenerator};
pub use payment_repository_postgres::PaymentRepositoryPostgres;
pub use stripe_gateway::{StripeConfig, StripeGateway};
