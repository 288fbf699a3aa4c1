pub mod sea_orm_entity;
pub mod vote_repository_postgres;

pub use vote_repository_postgres::VoteRepositoryPostgres;
