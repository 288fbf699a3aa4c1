use std::sync::Arc;

use crate::modules::cold_investor::application::ports::incoming::use_cases::{
    CreateColdInvestorUseCase, CreateDecisionMakerUseCase, ListColdInvestorsUseCase,
};

#[derive(Clone)]
pub struct ColdInvestorUseCases {
    pub list: Arc<dyn ListColdInvestorsUseCase + Send + Sync>,
    pub create_investor: Arc<dyn CreateColdInvestorUseCase + Send + Sync>,
    pub create_decision_maker: Arc<dyn CreateDecisionMakerUseCase + Send + Sync>,
}
