pub mod cold_investor_query_postgres;
pub mod cold_investor_repository_postgres;
pub mod sea_orm_entity;

pub use cold_investor_query_postgres::ColdInvestorQueryPostgres;
pub use cold_investor_repository_postgres::ColdInvestorRepositoryPostgres;
