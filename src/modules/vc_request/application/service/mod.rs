pub mod get_my_request_stats_service;

pub use get_my_request_stats_service::GetMyRequestStatsService;
