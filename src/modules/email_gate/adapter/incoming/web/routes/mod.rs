pub mod check_access;
pub mod submit_email;

pub use check_access::{check_access_handler, AccessQuery};
pub use submit_email::{submit_email_handler, SubmitEmailRequest};
