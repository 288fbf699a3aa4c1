pub mod get_my_request_stats;

pub use get_my_request_stats::{GetMyRequestStatsError, GetMyRequestStatsUseCase};
