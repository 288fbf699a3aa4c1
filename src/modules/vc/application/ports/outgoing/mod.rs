pub mod vc_query;
pub mod vc_repository;
pub mod vc_unlock_query;

pub use vc_query::{VcQuery, VcQueryError};
pub use vc_repository::{VcRepository, VcRepositoryError};
pub use vc_unlock_query::{VcUnlockQuery, VcUnlockQueryError, VcUnlockRecord};
