use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::founder::application::domain::entities::is_http_url;
use crate::modules::vc::application::domain::entities::normalize_tags;
use crate::shared::email::normalize_email;

/// A fund that has not joined the marketplace; its people are unlocked one by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColdInvestor {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub sectors: Vec<String>,
    pub stages: Vec<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Full decision maker record, contact fields included. Never serialized to the public.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMaker {
    pub id: Uuid,
    pub cold_investor_id: Uuid,
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionMakerContact {
    pub decision_maker_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
}

impl From<&DecisionMaker> for DecisionMakerContact {
    fn from(dm: &DecisionMaker) -> Self {
        Self {
            decision_maker_id: dm.id,
            name: dm.name.clone(),
            email: dm.email.clone(),
            linkedin_url: dm.linkedin_url.clone(),
        }
    }
}

/// Decision maker as shown to a viewer; contact fields only when unlocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionMakerView {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub is_unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

impl DecisionMakerView {
    pub fn for_viewer(dm: DecisionMaker, unlocked: bool) -> Self {
        let (email, linkedin_url) = if unlocked {
            (dm.email, dm.linkedin_url)
        } else {
            (None, None)
        };
        Self {
            id: dm.id,
            name: dm.name,
            title: dm.title,
            is_unlocked: unlocked,
            email,
            linkedin_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColdInvestorRecord {
    pub investor: ColdInvestor,
    pub decision_makers: Vec<DecisionMaker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColdInvestorListing {
    #[serde(flatten)]
    pub investor: ColdInvestor,
    pub decision_makers: Vec<DecisionMakerView>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewColdInvestor {
    pub name: String,
    pub website: Option<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub stages: Vec<String>,
    pub location: Option<String>,
}

impl NewColdInvestor {
    /// Trims the name, checks the website and normalizes tag lists in place.
    pub fn validate(&mut self) -> Result<(), String> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err("name is required".to_string());
        }
        if let Some(website) = &self.website {
            if !is_http_url(website) {
                return Err("website must be an http(s) URL".to_string());
            }
        }
        self.sectors = normalize_tags(std::mem::take(&mut self.sectors));
        self.stages = normalize_tags(std::mem::take(&mut self.stages));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDecisionMaker {
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
}

impl NewDecisionMaker {
    pub fn validate(&mut self) -> Result<(), String> {
        self.name = self.name.trim().to_string();
        self.title = self.title.trim().to_string();
        if self.name.is_empty() || self.title.is_empty() {
            return Err("name and title are required".to_string());
        }
        if let Some(email) = &self.email {
            self.email = Some(normalize_email(email)?);
        }
        if let Some(url) = &self.linkedin_url {
            if !is_http_url(url) {
                return Err("linkedinUrl must be an http(s) URL".to_string());
            }
        }
        if self.email.is_none() && self.linkedin_url.is_none() {
            return Err("an email or linkedinUrl is required".to_string());
        }
        Ok(())
    }
}
