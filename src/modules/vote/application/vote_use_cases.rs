use std::sync::Arc;

use crate::modules::vote::application::ports::incoming::use_cases::{
    CastVoteUseCase, RemoveVoteUseCase, VoteStatusUseCase,
};

#[derive(Clone)]
pub struct VoteUseCases {
    pub cast: Arc<dyn CastVoteUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveVoteUseCase + Send + Sync>,
    pub status: Arc<dyn VoteStatusUseCase + Send + Sync>,
}
