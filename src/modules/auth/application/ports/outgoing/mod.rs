pub mod password_hasher;
pub mod session_blacklist;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_blacklist::{SessionBlacklist, SessionBlacklistError};
pub use token_provider::{IssuedToken, SessionClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError};
