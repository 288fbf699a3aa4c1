pub mod cold_investors;
pub mod decision_maker_unlocks;
pub mod decision_makers;
