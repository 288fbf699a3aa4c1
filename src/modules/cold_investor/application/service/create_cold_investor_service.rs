use async_trait::async_trait;

use crate::modules::cold_investor::application::domain::entities::{ColdInvestor, NewColdInvestor};
use crate::modules::cold_investor::application::ports::incoming::use_cases::{
    CreateColdInvestorError, CreateColdInvestorUseCase,
};
use crate::modules::cold_investor::application::ports::outgoing::ColdInvestorRepository;

pub struct CreateColdInvestorService<R>
where
    R: ColdInvestorRepository,
{
    repository: R,
}

impl<R> CreateColdInvestorService<R>
where
    R: ColdInvestorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateColdInvestorUseCase for CreateColdInvestorService<R>
where
    R: ColdInvestorRepository + Send + Sync,
{
    async fn execute(
        &self,
        mut investor: NewColdInvestor,
    ) -> Result<ColdInvestor, CreateColdInvestorError> {
        investor
            .validate()
            .map_err(CreateColdInvestorError::Validation)?;

        let created = self
            .repository
            .create_investor(investor)
            .await
            .map_err(|e| CreateColdInvestorError::RepositoryError(e.to_string()))?;

        tracing::info!(cold_investor_id = %created.id, "Cold investor created");
        Ok(created)
    }
}
