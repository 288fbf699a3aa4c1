pub mod founder_query;
pub mod founder_repository;

pub use founder_query::{FounderQuery, FounderQueryError};
pub use founder_repository::{FounderRepository, FounderRepositoryError};
