pub mod create_cold_investor;
pub mod create_decision_maker;
pub mod list_cold_investors;

pub use create_cold_investor::{CreateColdInvestorError, CreateColdInvestorUseCase};
pub use create_decision_maker::{CreateDecisionMakerError, CreateDecisionMakerUseCase};
pub use list_cold_investors::{ListColdInvestorsError, ListColdInvestorsUseCase};
