pub mod vc_request_repository;

pub use vc_request_repository::{VcRequestRepository, VcRequestRepositoryError};
