use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One investor row from the external directory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
    pub firm: Option<String>,
    pub website: Option<String>,
    pub sectors: Vec<String>,
    pub stages: Vec<String>,
    pub location: Option<String>,
    pub check_size: Option<String>,
}
