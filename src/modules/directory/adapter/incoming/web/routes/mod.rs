pub mod get_directory;

pub use get_directory::{get_directory_handler, DirectoryQuery};
