use std::sync::Arc;

use crate::modules::email_gate::application::ports::incoming::use_cases::{
    CheckAccessUseCase, SubmitEmailUseCase,
};

#[derive(Clone)]
pub struct EmailGateUseCases {
    pub submit: Arc<dyn SubmitEmailUseCase + Send + Sync>,
    pub check: Arc<dyn CheckAccessUseCase + Send + Sync>,
}
