pub mod cast_vote_service;
pub mod remove_vote_service;
pub mod vote_status_service;

pub use cast_vote_service::CastVoteService;
pub use remove_vote_service::RemoveVoteService;
pub use vote_status_service::VoteStatusService;
