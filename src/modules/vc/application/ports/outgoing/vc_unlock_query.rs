use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VcUnlockQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VcUnlockRecord {
    pub vc_id: Uuid,
    pub intro_template: Option<String>,
    pub unlocked_at: DateTime<Utc>,
}

/// Completed `vc_unlock` payments, read from the payment ledger.
#[async_trait]
pub trait VcUnlockQuery: Send + Sync {
    async fn has_unlocked(&self, founder_id: Uuid, vc_id: Uuid) -> Result<bool, VcUnlockQueryError>;

    /// Newest first, one record per VC.
    async fn unlocked_vcs(&self, founder_id: Uuid) -> Result<Vec<VcUnlockRecord>, VcUnlockQueryError>;
}
