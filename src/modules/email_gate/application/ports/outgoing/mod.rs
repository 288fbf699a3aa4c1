pub mod email_submission_repository;

pub use email_submission_repository::{EmailSubmissionRepository, EmailSubmissionRepositoryError};
