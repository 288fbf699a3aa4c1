pub mod cast_vote;
pub mod remove_vote;
pub mod vote_status;

pub use cast_vote::{cast_vote_handler, CastVoteRequest};
pub use remove_vote::remove_vote_handler;
pub use vote_status::{vote_status_handler, VoterQuery};
