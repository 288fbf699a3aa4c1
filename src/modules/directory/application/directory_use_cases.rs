use std::sync::Arc;

use crate::modules::directory::application::ports::incoming::use_cases::GetDirectoryUseCase;

#[derive(Clone)]
pub struct DirectoryUseCases {
    pub get: Arc<dyn GetDirectoryUseCase + Send + Sync>,
}
