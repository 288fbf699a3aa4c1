pub mod airtable_directory_source;

pub use airtable_directory_source::{AirtableConfig, AirtableDirectorySource};
