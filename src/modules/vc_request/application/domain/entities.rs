use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VcRequestKind {
    Unlock,
    IntroRequest,
}

impl VcRequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VcRequestKind::Unlock => "unlock",
            VcRequestKind::IntroRequest => "intro_request",
        }
    }
}

impl fmt::Display for VcRequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VcRequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unlock" => Ok(VcRequestKind::Unlock),
            "intro_request" => Ok(VcRequestKind::IntroRequest),
            other => Err(format!("unknown vc request kind '{}'", other)),
        }
    }
}

/// How often founders paid to reach one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VcRequestStats {
    pub vc_id: Uuid,
    pub unlocks: u64,
    pub intro_requests: u64,
}

impl VcRequestStats {
    pub fn empty(vc_id: Uuid) -> Self {
        Self {
            vc_id,
            unlocks: 0,
            intro_requests: 0,
        }
    }

    pub fn add(&mut self, kind: VcRequestKind, count: u64) {
        match kind {
            VcRequestKind::Unlock => self.unlocks += count,
            VcRequestKind::IntroRequest => self.intro_requests += count,
        }
    }
}
