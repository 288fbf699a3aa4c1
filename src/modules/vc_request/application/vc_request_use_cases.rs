use std::sync::Arc;

use crate::modules::vc_request::application::ports::incoming::use_cases::GetMyRequestStatsUseCase;

#[derive(Clone)]
pub struct VcRequestUseCases {
    pub my_stats: Arc<dyn GetMyRequestStatsUseCase + Send + Sync>,
}
