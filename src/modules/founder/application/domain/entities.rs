use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;

const MAX_NAME_LEN: usize = 120;
const MAX_TAGLINE_LEN: usize = 200;
const MAX_PITCH_LEN: usize = 5000;
const MAX_URL_LEN: usize = 500;
const MAX_LABEL_LEN: usize = 60;

/// Founder row as seen by its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FounderProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub project_name: String,
    pub tagline: String,
    pub pitch: String,
    pub website: Option<String>,
    pub sector: Option<String>,
    pub stage: Option<String>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public Scout card for a visible founder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoutProject {
    pub id: Uuid,
    pub company_name: String,
    pub project_name: String,
    pub tagline: String,
    pub pitch: String,
    pub website: Option<String>,
    pub sector: Option<String>,
    pub stage: Option<String>,
    pub vote_count: u64,
    pub created_at: DateTime<Utc>,
}

impl ScoutProject {
    pub fn from_profile(profile: FounderProfile, vote_count: u64) -> Self {
        Self {
            id: profile.id,
            company_name: profile.company_name,
            project_name: profile.project_name,
            tagline: profile.tagline,
            pitch: profile.pitch,
            website: profile.website,
            sector: profile.sector,
            stage: profile.stage,
            vote_count,
            created_at: profile.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoutSort {
    #[default]
    Votes,
    Newest,
}

impl FromStr for ScoutSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "votes" => Ok(ScoutSort::Votes),
            "newest" => Ok(ScoutSort::Newest),
            other => Err(format!("unknown sort '{}'", other)),
        }
    }
}

/// Owner edit of a founder row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FounderPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub company_name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub project_name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub tagline: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub pitch: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub website: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub sector: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub stage: PatchField<String>,
}

fn check_required(
    field: &str,
    value: &PatchField<String>,
    max: usize,
) -> Result<(), String> {
    match value {
        PatchField::Unset => Ok(()),
        PatchField::Null => Err(format!("{} cannot be null", field)),
        PatchField::Value(v) if v.trim().chars().count() > max => {
            Err(format!("{} must be at most {} characters", field, max))
        }
        PatchField::Value(_) => Ok(()),
    }
}

fn check_optional(field: &str, value: &PatchField<String>, max: usize) -> Result<(), String> {
    match value.as_value() {
        Some(v) if v.trim().is_empty() => Err(format!("{} cannot be blank; send null to clear", field)),
        Some(v) if v.trim().chars().count() > max => {
            Err(format!("{} must be at most {} characters", field, max))
        }
        _ => Ok(()),
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    let v = value.trim();
    (v.starts_with("https://") || v.starts_with("http://")) && !v.contains(char::is_whitespace)
}

impl FounderPatch {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_unset()
            && self.project_name.is_unset()
            && self.tagline.is_unset()
            && self.pitch.is_unset()
            && self.website.is_unset()
            && self.sector.is_unset()
            && self.stage.is_unset()
    }

    pub fn validate(&self) -> Result<(), String> {
        check_required("companyName", &self.company_name, MAX_NAME_LEN)?;
        check_required("projectName", &self.project_name, MAX_NAME_LEN)?;
        check_required("tagline", &self.tagline, MAX_TAGLINE_LEN)?;
        check_required("pitch", &self.pitch, MAX_PITCH_LEN)?;
        check_optional("website", &self.website, MAX_URL_LEN)?;
        check_optional("sector", &self.sector, MAX_LABEL_LEN)?;
        check_optional("stage", &self.stage, MAX_LABEL_LEN)?;

        if let Some(url) = self.website.as_value() {
            if !is_http_url(url) {
                return Err("website must be an http(s) URL".to_string());
            }
        }
        Ok(())
    }
}
