pub mod vote_repository;

pub use vote_repository::{VoteRepository, VoteRepositoryError};
