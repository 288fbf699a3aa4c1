pub mod cast_vote;
pub mod remove_vote;
pub mod vote_status;

pub use cast_vote::{CastVoteError, CastVoteUseCase};
pub use remove_vote::{RemoveVoteError, RemoveVoteUseCase};
pub use vote_status::{VoteStatusError, VoteStatusUseCase};
