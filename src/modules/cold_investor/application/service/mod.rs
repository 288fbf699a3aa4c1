pub mod create_cold_investor_service;
pub mod create_decision_maker_service;
pub mod list_cold_investors_service;

pub use create_cold_investor_service::CreateColdInvestorService;
pub use create_decision_maker_service::CreateDecisionMakerService;
pub use list_cold_investors_service::ListColdInvestorsService;
