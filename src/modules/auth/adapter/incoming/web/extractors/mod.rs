pub mod auth;
pub mod session_cookie;

pub use auth::{AdminUser, AuthenticatedUser, FounderUser, InvestorUser};
