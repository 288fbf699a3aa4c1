pub mod basic_password_policy;
pub mod token_hasher;

pub use basic_password_policy::BasicPasswordPolicy;
pub use token_hasher::hash_token;
