use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

/// Source granting access to the VC directory.
pub const DIRECTORY_SOURCE: &str = "ping";

static SOURCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_-]{1,32}$").expect("source pattern is a valid regex")
});

/// Trims and lower-cases a gate source, rejecting anything outside `[a-z0-9_-]{1,32}`.
pub fn normalize_source(raw: &str) -> Result<String, String> {
    let source = raw.trim().to_lowercase();
    if SOURCE_PATTERN.is_match(&source) {
        Ok(source)
    } else {
        Err("source must be 1-32 characters of a-z, 0-9, '_' or '-'".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailAccess {
    pub email: String,
    pub source: String,
    pub has_access: bool,
}
