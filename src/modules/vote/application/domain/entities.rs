use chrono::Duration;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum gap between two votes from the same email, across all projects.
pub fn vote_cooldown() -> Duration {
    Duration::hours(24)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteStatus {
    pub has_voted: bool,
    pub vote_count: u64,
}
