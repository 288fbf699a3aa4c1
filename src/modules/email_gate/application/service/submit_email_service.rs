use async_trait::async_trait;

use crate::modules::email_gate::application::domain::entities::{normalize_source, EmailAccess};
use crate::modules::email_gate::application::ports::incoming::use_cases::{
    SubmitEmailError, SubmitEmailUseCase,
};
use crate::modules::email_gate::application::ports::outgoing::EmailSubmissionRepository;
use crate::shared::email::normalize_email;

pub struct SubmitEmailService<R>
where
    R: EmailSubmissionRepository,
{
    repository: R,
}

impl<R> SubmitEmailService<R>
where
    R: EmailSubmissionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitEmailUseCase for SubmitEmailService<R>
where
    R: EmailSubmissionRepository + Send + Sync,
{
    async fn execute(&self, email: &str, source: &str) -> Result<EmailAccess, SubmitEmailError> {
        let email = normalize_email(email).map_err(SubmitEmailError::Validation)?;
        let source = normalize_source(source).map_err(SubmitEmailError::Validation)?;

        self.repository
            .record(&email, &source)
            .await
            .map_err(|e| SubmitEmailError::RepositoryError(e.to_string()))?;

        tracing::info!(source = %source, "Email submitted to gate");

        Ok(EmailAccess {
            email,
            source,
            has_access: true,
        })
    }
}
