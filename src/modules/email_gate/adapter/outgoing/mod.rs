pub mod email_submission_repository_postgres;
pub mod sea_orm_entity;

pub use email_submission_repository_postgres::EmailSubmissionRepositoryPostgres;
