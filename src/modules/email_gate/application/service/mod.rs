pub mod check_access_service;
pub mod submit_email_service;

pub use check_access_service::CheckAccessService;
pub use submit_email_service::SubmitEmailService;
