pub mod cold_investor_query;
pub mod cold_investor_repository;

pub use cold_investor_query::{ColdInvestorQuery, ColdInvestorQueryError};
pub use cold_investor_repository::{ColdInvestorRepository, ColdInvestorRepositoryError};
