use async_trait::async_trait;

use crate::modules::email_gate::application::domain::entities::{normalize_source, EmailAccess};
use crate::modules::email_gate::application::ports::incoming::use_cases::{
    CheckAccessError, CheckAccessUseCase,
};
use crate::modules::email_gate::application::ports::outgoing::EmailSubmissionRepository;
use crate::shared::email::normalize_email;

pub struct CheckAccessService<R>
where
    R: EmailSubmissionRepository,
{
    repository: R,
}

impl<R> CheckAccessService<R>
where
    R: EmailSubmissionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CheckAccessUseCase for CheckAccessService<R>
where
    R: EmailSubmissionRepository + Send + Sync,
{
    async fn execute(&self, email: &str, source: &str) -> Result<EmailAccess, CheckAccessError> {
        let email = normalize_email(email).map_err(CheckAccessError::Validation)?;
        let source = normalize_source(source).map_err(CheckAccessError::Validation)?;

        let has_access = self
            .repository
            .exists(&email, &source)
            .await
            .map_err(|e| CheckAccessError::RepositoryError(e.to_string()))?;

        Ok(EmailAccess {
            email,
            source,
            has_access,
        })
    }
}
