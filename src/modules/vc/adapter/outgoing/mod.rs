pub mod sea_orm_entity;
pub mod vc_query_postgres;
pub mod vc_repository_postgres;

pub use vc_query_postgres::VcQueryPostgres;
pub use vc_repository_postgres::VcRepositoryPostgres;
