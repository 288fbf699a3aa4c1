use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;

const MAX_NAME_LEN: usize = 120;
const MAX_BIO_LEN: usize = 2000;
const MAX_SHORT_LEN: usize = 120;
const MAX_CONTACT_LEN: usize = 500;
const MAX_TAGS: usize = 20;
const MAX_TAG_LEN: usize = 60;
pub const MAX_PRICE: i32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Linkedin,
    Calendly,
    Phone,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Linkedin => "linkedin",
            ContactMethod::Calendly => "calendly",
            ContactMethod::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(ContactMethod::Email),
            "linkedin" => Ok(ContactMethod::Linkedin),
            "calendly" => Ok(ContactMethod::Calendly),
            "phone" => Ok(ContactMethod::Phone),
            other => Err(format!("unknown contact method '{}'", other)),
        }
    }
}

/// Public view of a listing. Never carries contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VcCard {
    pub id: Uuid,
    pub name: String,
    pub fund_name: String,
    pub title: String,
    pub bio: String,
    pub sectors: Vec<String>,
    pub stages: Vec<String>,
    pub check_size: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub price: i32,
    pub intro_price: Option<i32>,
    pub contact_method: ContactMethod,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Revealed only to founders holding a completed unlock, and to the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VcContact {
    pub contact_method: ContactMethod,
    pub contact_value: String,
    pub linkedin_url: Option<String>,
}

/// Full listing row: what the owner and admins see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VcListing {
    #[serde(flatten)]
    pub card: VcCard,
    pub user_id: Uuid,
    pub contact: VcContact,
    pub pending_changes: Option<VcChanges>,
    pub updated_at: DateTime<Utc>,
}

/// A VC the founder has paid to unlock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedVc {
    pub vc: VcCard,
    pub contact: VcContact,
    pub intro_template: Option<String>,
    pub unlocked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VcFilter {
    pub verified_only: bool,
    pub sector: Option<String>,
    pub stage: Option<String>,
    pub search: Option<String>,
}

impl VcFilter {
    /// Lower-cases tag filters and drops blank values.
    pub fn normalized(self) -> Self {
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
        };
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            verified_only: self.verified_only,
            sector: clean(self.sector),
            stage: clean(self.stage),
            search,
        }
    }
}

/// Input for a new listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVc {
    pub name: String,
    pub fund_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub stages: Vec<String>,
    pub check_size: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub price: i32,
    pub intro_price: Option<i32>,
    pub contact_method: ContactMethod,
    pub contact_value: String,
    pub linkedin_url: Option<String>,
}

/// Owner-proposed edit, stored as jsonb until an admin reviews it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VcChanges {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub fund_name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>)]
    pub sectors: PatchField<Vec<String>>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>)]
    pub stages: PatchField<Vec<String>>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub check_size: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub website: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<i32>)]
    pub price: PatchField<i32>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<i32>)]
    pub intro_price: PatchField<i32>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<ContactMethod>)]
    pub contact_method: PatchField<ContactMethod>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub contact_value: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub linkedin_url: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

fn check_text(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len < min {
        return Err(format!("{} is required", field));
    }
    if len > max {
        return Err(format!("{} must be at most {} characters", field, max));
    }
    Ok(())
}

fn check_url(field: &str, value: &str) -> Result<(), String> {
    check_text(field, value, 1, MAX_CONTACT_LEN)?;
    if !crate::modules::founder::application::domain::entities::is_http_url(value) {
        return Err(format!("{} must be an http(s) URL", field));
    }
    Ok(())
}

fn check_tags(field: &str, tags: &[String]) -> Result<(), String> {
    if tags.len() > MAX_TAGS {
        return Err(format!("{} accepts at most {} entries", field, MAX_TAGS));
    }
    for tag in tags {
        check_text(field, tag, 1, MAX_TAG_LEN)?;
    }
    Ok(())
}

fn check_price(field: &str, price: i32) -> Result<(), String> {
    if price <= 0 || price > MAX_PRICE {
        return Err(format!("{} must be between 1 and {} USD", field, MAX_PRICE));
    }
    Ok(())
}

/// Trimmed, lower-cased and de-duplicated so jsonb containment filters match.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

impl NewVc {
    pub fn validate(&self) -> Result<(), String> {
        check_text("name", &self.name, 1, MAX_NAME_LEN)?;
        check_text("fundName", &self.fund_name, 1, MAX_NAME_LEN)?;
        check_text("title", &self.title, 0, MAX_SHORT_LEN)?;
        check_text("bio", &self.bio, 0, MAX_BIO_LEN)?;
        check_tags("sectors", &self.sectors)?;
        check_tags("stages", &self.stages)?;
        if let Some(v) = &self.check_size {
            check_text("checkSize", v, 1, MAX_SHORT_LEN)?;
        }
        if let Some(v) = &self.location {
            check_text("location", v, 1, MAX_SHORT_LEN)?;
        }
        if let Some(v) = &self.website {
            check_url("website", v)?;
        }
        check_price("price", self.price)?;
        if let Some(p) = self.intro_price {
            check_price("introPrice", p)?;
        }
        check_text("contactValue", &self.contact_value, 1, MAX_CONTACT_LEN)?;
        if let Some(v) = &self.linkedin_url {
            check_url("linkedinUrl", v)?;
        }
        Ok(())
    }
}

fn reject_null<T>(field: &str, value: &PatchField<T>) -> Result<(), String> {
    if value.is_null() {
        return Err(format!("{} cannot be null", field));
    }
    Ok(())
}

impl VcChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.fund_name.is_unset()
            && self.title.is_unset()
            && self.bio.is_unset()
            && self.sectors.is_unset()
            && self.stages.is_unset()
            && self.check_size.is_unset()
            && self.location.is_unset()
            && self.website.is_unset()
            && self.price.is_unset()
            && self.intro_price.is_unset()
            && self.contact_method.is_unset()
            && self.contact_value.is_unset()
            && self.linkedin_url.is_unset()
    }

    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("fundName", &self.fund_name),
            ("title", &self.title),
            ("bio", &self.bio),
            ("contactValue", &self.contact_value),
        ] {
            reject_null(field, value)?;
        }
        reject_null("sectors", &self.sectors)?;
        reject_null("stages", &self.stages)?;
        reject_null("price", &self.price)?;
        reject_null("contactMethod", &self.contact_method)?;

        if let Some(v) = self.name.as_value() {
            check_text("name", v, 1, MAX_NAME_LEN)?;
        }
        if let Some(v) = self.fund_name.as_value() {
            check_text("fundName", v, 1, MAX_NAME_LEN)?;
        }
        if let Some(v) = self.title.as_value() {
            check_text("title", v, 0, MAX_SHORT_LEN)?;
        }
        if let Some(v) = self.bio.as_value() {
            check_text("bio", v, 0, MAX_BIO_LEN)?;
        }
        if let Some(v) = self.sectors.as_value() {
            check_tags("sectors", v)?;
        }
        if let Some(v) = self.stages.as_value() {
            check_tags("stages", v)?;
        }
        if let Some(v) = self.check_size.as_value() {
            check_text("checkSize", v, 1, MAX_SHORT_LEN)?;
        }
        if let Some(v) = self.location.as_value() {
            check_text("location", v, 1, MAX_SHORT_LEN)?;
        }
        if let Some(v) = self.website.as_value() {
            check_url("website", v)?;
        }
        if let Some(p) = self.price.as_value() {
            check_price("price", *p)?;
        }
        if let Some(p) = self.intro_price.as_value() {
            check_price("introPrice", *p)?;
        }
        if let Some(v) = self.contact_value.as_value() {
            check_text("contactValue", v, 1, MAX_CONTACT_LEN)?;
        }
        if let Some(v) = self.linkedin_url.as_value() {
            check_url("linkedinUrl", v)?;
        }
        Ok(())
    }
}
