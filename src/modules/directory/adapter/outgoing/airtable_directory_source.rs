use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::env;
use std::time::Duration;

use crate::modules::directory::application::domain::entities::DirectoryEntry;
use crate::modules::directory::application::ports::outgoing::{
    DirectorySourceError, VcDirectorySource,
};

const PAGE_SIZE: &str = "100";
const MAX_PAGES: usize = 50;

#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table: String,
    pub base_url: String,
}

impl AirtableConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("AIRTABLE_API_KEY").expect("AIRTABLE_API_KEY must be set"),
            base_id: env::var("AIRTABLE_BASE_ID").expect("AIRTABLE_BASE_ID must be set"),
            table: env::var("AIRTABLE_TABLE").unwrap_or_else(|_| "VCs".to_string()),
            base_url: env::var("AIRTABLE_BASE_URL")
                .unwrap_or_else(|_| "https://api.airtable.com/v0".to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/{}/{}", self.base_url, self.base_id, self.table)
    }
}

#[derive(Clone)]
pub struct AirtableDirectorySource {
    client: Client,
    config: AirtableConfig,
}

impl AirtableDirectorySource {
    pub fn new(config: AirtableConfig) -> Result<Self, DirectorySourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| DirectorySourceError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn fetch_page(&self, offset: Option<&str>) -> Result<RecordPage, DirectorySourceError> {
        let mut query = vec![("pageSize", PAGE_SIZE)];
        if let Some(offset) = offset {
            query.push(("offset", offset));
        }

        let response = self
            .client
            .get(self.config.table_url())
            .bearer_auth(&self.config.api_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| DirectorySourceError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DirectorySourceError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(DirectorySourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        parse_page(&body)
    }
}

#[derive(Debug, Deserialize)]
struct RecordPage {
    records: Vec<AirtableRecord>,
    offset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AirtableRecord {
    id: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

fn parse_page(body: &str) -> Result<RecordPage, DirectorySourceError> {
    serde_json::from_str(body).map_err(|e| DirectorySourceError::InvalidResponse(e.to_string()))
}

/// First non-empty text among the candidate column names.
fn text_field(fields: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| match fields.get(*name)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts multi-select arrays and comma-separated text.
fn list_field(fields: &Map<String, Value>, names: &[&str]) -> Vec<String> {
    let raw: Vec<String> = names
        .iter()
        .find_map(|name| match fields.get(*name)? {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            ),
            Value::String(s) => Some(s.split(',').map(str::to_string).collect()),
            _ => None,
        })
        .unwrap_or_default();

    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn to_entry(record: AirtableRecord) -> Option<DirectoryEntry> {
    let fields = &record.fields;
    let name = text_field(fields, &["Name", "name", "Investor"])?;

    Some(DirectoryEntry {
        firm: text_field(fields, &["Firm", "Fund", "Company"]),
        website: text_field(fields, &["Website", "URL"]),
        sectors: list_field(fields, &["Sectors", "Industries", "Focus"]),
        stages: list_field(fields, &["Stages", "Stage"]),
        location: text_field(fields, &["Location", "HQ"]),
        check_size: text_field(fields, &["Check Size", "Check size", "Ticket"]),
        id: record.id,
        name,
    })
}

#[async_trait]
impl VcDirectorySource for AirtableDirectorySource {
    async fn fetch_all(&self) -> Result<Vec<DirectoryEntry>, DirectorySourceError> {
        let mut entries = Vec::new();
        let mut offset: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let page = self.fetch_page(offset.as_deref()).await?;
            let total = page.records.len();
            let kept: Vec<DirectoryEntry> = page.records.into_iter().filter_map(to_entry).collect();
            if kept.len() < total {
                tracing::debug!(skipped = total - kept.len(), "Skipped directory rows without a name");
            }
            entries.extend(kept);

            match page.offset {
                Some(next) => offset = Some(next),
                None => return Ok(entries),
            }
        }

        tracing::warn!(pages = MAX_PAGES, "Directory pagination stopped at the page limit");
        Ok(entries)
    }
}
