use std::sync::Arc;

use crate::modules::founder::application::ports::incoming::use_cases::{
    GetMyFounderUseCase, GetScoutProjectUseCase, ListScoutProjectsUseCase, PatchMyFounderUseCase,
};

#[derive(Clone)]
pub struct FounderUseCases {
    pub get_mine: Arc<dyn GetMyFounderUseCase + Send + Sync>,
    pub patch_mine: Arc<dyn PatchMyFounderUseCase + Send + Sync>,
    pub list_scout: Arc<dyn ListScoutProjectsUseCase + Send + Sync>,
    pub get_scout: Arc<dyn GetScoutProjectUseCase + Send + Sync>,
}
