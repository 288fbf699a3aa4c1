use async_trait::async_trait;
use thiserror::Error;

use crate::modules::directory::application::domain::entities::DirectoryEntry;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectorySourceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("directory returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected directory response: {0}")]
    InvalidResponse(String),
}

/// Read-only upstream table of investors, fetched on every request.
#[async_trait]
pub trait VcDirectorySource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<DirectoryEntry>, DirectorySourceError>;
}
