use async_trait::async_trait;
use thiserror::Error;

use crate::modules::payment::application::domain::intro_template::IntroContext;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntroTemplateError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("empty completion")]
    Empty,
}

#[async_trait]
pub trait IntroTemplateGenerator: Send + Sync {
    async fn generate(&self, ctx: &IntroContext) -> Result<String, IntroTemplateError>;
}
