pub mod admin_create_cold_investor;
pub mod admin_create_decision_maker;
pub mod list_cold_investors;

pub use admin_create_cold_investor::admin_create_cold_investor_handler;
pub use admin_create_decision_maker::admin_create_decision_maker_handler;
pub use list_cold_investors::{list_cold_investors_handler, ColdInvestorListQuery};
