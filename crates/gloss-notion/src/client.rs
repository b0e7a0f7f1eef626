use anyhow::{Context, Result};
use chrono::NaiveDate;
use gloss_config::notion::NotionConfig;
use gloss_core::store::{StoreError, WordStore};
use gloss_core::types::{ResolvedDefinition, WordRecord};
use reqwest::{Response, Url};
use serde::Deserialize;
use serde_json::json;

use crate::pages::{QueryResponse, pending_filter, update_properties};

const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionClient {
    base_url: Url,
    token: String,
    database_id: String,
    client: reqwest::Client,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("invalid Notion base URL: {}", config.base_url))?;

        Ok(Self {
            base_url,
            token: config.token.clone(),
            database_id: config.database_id.clone(),
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::Api(format!("invalid request path {path}: {e}")))
    }

    /// Send an authenticated request, turning non-success statuses into
    /// `StoreError::Api` with the message from the error body.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, StoreError> {
        let response = request
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ApiError>()
            .await
            .map(|e| e.message)
            .unwrap_or_default();
        if message.is_empty() {
            return Err(StoreError::Api(status.to_string()));
        }

        Err(StoreError::Api(format!("{status}: {message}")))
    }
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[async_trait::async_trait]
impl WordStore for NotionClient {
    async fn pending_words(&self) -> Result<Vec<WordRecord>, StoreError> {
        let url = self.endpoint(&format!("/v1/databases/{}/query", self.database_id))?;
        let body = json!({ "filter": pending_filter() });

        let response = self
            .send(self.client.post(url).json(&body))
            .await?
            .json::<QueryResponse>()
            .await?;

        if response.has_more {
            tracing::warn!(
                "Query matched more records than one result page; only the first page is processed"
            );
        }

        let mut words = Vec::new();
        for page in response.results {
            let word = match page.headword() {
                Some(word) => word.to_string(),
                None => {
                    tracing::warn!("Page {} has no headword text, skipping", page.id);
                    continue;
                }
            };
            words.push(WordRecord { id: page.id, word });
        }

        Ok(words)
    }

    async fn fill_definition(
        &self,
        record: &WordRecord,
        resolved: &ResolvedDefinition,
        date_added: NaiveDate,
    ) -> Result<(), StoreError> {
        let url = self.endpoint(&format!("/v1/pages/{}", record.id))?;
        let body = json!({ "properties": update_properties(resolved, date_added) });

        self.send(self.client.patch(url).json(&body)).await?;

        Ok(())
    }
}
