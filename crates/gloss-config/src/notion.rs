use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token. Read as-is; an empty value surfaces later as an
    /// authentication failure from the API, not as a local error
    pub token: String,
    /// Database holding the vocabulary records
    pub database_id: String,
    /// API base URL
    pub base_url: String,
}

impl NotionConfig {
    pub fn new() -> Self {
        Self {
            token: env::var("NOTION_TOKEN").unwrap_or_default(),
            database_id: env::var("NOTION_DATABASE_ID").unwrap_or_default(),
            base_url: env::var("NOTION_BASE_URL")
                .unwrap_or_else(|_| "https://api.notion.com".to_string()),
        }
    }
}
