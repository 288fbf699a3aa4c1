mod admin_guard;

pub use admin_guard::{AdminCheckError, AdminGuard};
