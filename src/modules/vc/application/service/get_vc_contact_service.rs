use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::founder::application::ports::outgoing::FounderRepository;
use crate::modules::vc::application::domain::entities::VcContact;
use crate::modules::vc::application::ports::incoming::use_cases::{
    GetVcContactError, GetVcContactUseCase,
};
use crate::modules::vc::application::ports::outgoing::{VcQuery, VcUnlockQuery};

pub struct GetVcContactService {
    vcs: Arc<dyn VcQuery + Send + Sync>,
    founders: Arc<dyn FounderRepository + Send + Sync>,
    unlocks: Arc<dyn VcUnlockQuery + Send + Sync>,
}

impl GetVcContactService {
    pub fn new(
        vcs: Arc<dyn VcQuery + Send + Sync>,
        founders: Arc<dyn FounderRepository + Send + Sync>,
        unlocks: Arc<dyn VcUnlockQuery + Send + Sync>,
    ) -> Self {
        Self {
            vcs,
            founders,
            unlocks,
        }
    }
}

#[async_trait]
impl GetVcContactUseCase for GetVcContactService {
    async fn execute(&self, founder_user_id: Uuid, vc_id: Uuid) -> Result<VcContact, GetVcContactError> {
        let listing = self
            .vcs
            .find_by_id(vc_id)
            .await
            .map_err(|e| GetVcContactError::RepositoryError(e.to_string()))?
            .ok_or(GetVcContactError::VcNotFound)?;

        let founder = self
            .founders
            .ensure_for_user(founder_user_id)
            .await
            .map_err(|e| GetVcContactError::RepositoryError(e.to_string()))?;

        let unlocked = self
            .unlocks
            .has_unlocked(founder.id, vc_id)
            .await
            .map_err(|e| GetVcContactError::RepositoryError(e.to_string()))?;

        if !unlocked {
            tracing::warn!(founder_id = %founder.id, vc_id = %vc_id, "Contact requested without unlock");
            return Err(GetVcContactError::NotUnlocked);
        }

        Ok(listing.contact)
    }
}
