pub mod sea_orm_entity;
pub mod vc_request_repository_postgres;

pub use vc_request_repository_postgres::VcRequestRepositoryPostgres;
