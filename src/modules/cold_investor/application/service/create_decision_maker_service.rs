use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::{
    DecisionMakerView, NewDecisionMaker,
};
use crate::modules::cold_investor::application::ports::incoming::use_cases::{
    CreateDecisionMakerError, CreateDecisionMakerUseCase,
};
use crate::modules::cold_investor::application::ports::outgoing::{
    ColdInvestorRepository, ColdInvestorRepositoryError,
};

pub struct CreateDecisionMakerService<R>
where
    R: ColdInvestorRepository,
{
    repository: R,
}

impl<R> CreateDecisionMakerService<R>
where
    R: ColdInvestorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateDecisionMakerUseCase for CreateDecisionMakerService<R>
where
    R: ColdInvestorRepository + Send + Sync,
{
    async fn execute(
        &self,
        cold_investor_id: Uuid,
        mut decision_maker: NewDecisionMaker,
    ) -> Result<DecisionMakerView, CreateDecisionMakerError> {
        decision_maker
            .validate()
            .map_err(CreateDecisionMakerError::Validation)?;

        let created = self
            .repository
            .create_decision_maker(cold_investor_id, decision_maker)
            .await
            .map_err(|e| match e {
                ColdInvestorRepositoryError::InvestorNotFound => {
                    CreateDecisionMakerError::InvestorNotFound
                }
                other => CreateDecisionMakerError::RepositoryError(other.to_string()),
            })?;

        Ok(DecisionMakerView::for_viewer(created, true))
    }
}
