pub mod vc_directory_source;

pub use vc_directory_source::{DirectorySourceError, VcDirectorySource};
