pub mod founder_query_postgres;
pub mod founder_repository_postgres;
pub mod sea_orm_entity;

pub use founder_query_postgres::FounderQueryPostgres;
pub use founder_repository_postgres::FounderRepositoryPostgres;
