use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::founder::application::ports::outgoing::FounderRepository;
use crate::modules::vc::application::domain::entities::UnlockedVc;
use crate::modules::vc::application::ports::incoming::use_cases::{
    ListUnlockedVcsError, ListUnlockedVcsUseCase,
};
use crate::modules::vc::application::ports::outgoing::{VcQuery, VcUnlockQuery};

pub struct ListUnlockedVcsService {
    vcs: Arc<dyn VcQuery + Send + Sync>,
    founders: Arc<dyn FounderRepository + Send + Sync>,
    unlocks: Arc<dyn VcUnlockQuery + Send + Sync>,
}

impl ListUnlockedVcsService {
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
impl ListUnlockedVcsUseCase for ListUnlockedVcsService {
    async fn execute(&self, founder_user_id: Uuid) -> Result<Vec<UnlockedVc>, ListUnlockedVcsError> {
        let founder = self
            .founders
            .ensure_for_user(founder_user_id)
            .await
            .map_err(|e| ListUnlockedVcsError::RepositoryError(e.to_string()))?;

        let records = self
            .unlocks
            .unlocked_vcs(founder.id)
            .await
            .map_err(|e| ListUnlockedVcsError::RepositoryError(e.to_string()))?;

        if records.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = records.iter().map(|r| r.vc_id).collect();
        let mut listings: HashMap<Uuid, _> = self
            .vcs
            .list_by_ids(&ids)
            .await
            .map_err(|e| ListUnlockedVcsError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|l| (l.card.id, l))
            .collect();

        // Listings deleted after the unlock drop out; record order is kept.
        Ok(records
            .into_iter()
            .filter_map(|record| {
                listings.remove(&record.vc_id).map(|listing| UnlockedVc {
                    vc: listing.card,
                    contact: listing.contact,
                    intro_template: record.intro_template,
                    unlocked_at: record.unlocked_at,
                })
            })
            .collect())
    }
}
