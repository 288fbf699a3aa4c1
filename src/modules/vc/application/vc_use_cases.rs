use std::sync::Arc;

use crate::modules::vc::application::ports::incoming::use_cases::{
    CreateVcUseCase, GetMyVcUseCase, GetVcContactUseCase, GetVcUseCase, ListAllVcsUseCase,
    ListUnlockedVcsUseCase, ListVcsUseCase, PatchMyVcUseCase, ReviewPendingChangesUseCase,
    VerifyVcUseCase,
};

#[derive(Clone)]
pub struct VcUseCases {
    pub create: Arc<dyn CreateVcUseCase + Send + Sync>,
    pub list: Arc<dyn ListVcsUseCase + Send + Sync>,
    pub get: Arc<dyn GetVcUseCase + Send + Sync>,
    pub get_mine: Arc<dyn GetMyVcUseCase + Send + Sync>,
    pub patch_mine: Arc<dyn PatchMyVcUseCase + Send + Sync>,
    pub get_contact: Arc<dyn GetVcContactUseCase + Send + Sync>,
    pub list_unlocked: Arc<dyn ListUnlockedVcsUseCase + Send + Sync>,
    pub verify: Arc<dyn VerifyVcUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListAllVcsUseCase + Send + Sync>,
    pub review_pending: Arc<dyn ReviewPendingChangesUseCase + Send + Sync>,
}
