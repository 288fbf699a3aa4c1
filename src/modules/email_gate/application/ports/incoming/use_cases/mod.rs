pub mod check_access;
pub mod submit_email;

pub use check_access::{CheckAccessError, CheckAccessUseCase};
pub use submit_email::{SubmitEmailError, SubmitEmailUseCase};
