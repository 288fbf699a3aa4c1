pub mod get_my_request_stats;

pub use get_my_request_stats::get_my_request_stats_handler;
