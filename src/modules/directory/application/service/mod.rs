pub mod get_directory_service;

pub use get_directory_service::GetDirectoryService;
