use anyhow::{Context, Result, anyhow};
use gloss_config::dictionary::DictionaryConfig;
use gloss_core::lookup::DefinitionProvider;
use gloss_core::types::ResolvedDefinition;
use reqwest::Url;

use crate::response::{DictEntry, resolve_entries};

#[derive(Clone)]
pub struct DictionaryClient {
    base_url: Url,
    tagging: bool,
    client: reqwest::Client,
}

impl DictionaryClient {
    pub fn new(config: &DictionaryConfig) -> Result<Self> {
        let base_url = Url::parse(&config.endpoint)
            .with_context(|| format!("invalid dictionary endpoint: {}", config.endpoint))?;

        Ok(Self {
            base_url,
            tagging: config.tags,
            client: reqwest::Client::new(),
        })
    }

    fn entry_url(&self, word: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("dictionary endpoint cannot be a base"))?
            .pop_if_empty()
            .extend(["entries", "en", word]);
        Ok(url)
    }

    /// Fetch raw entries; `Ok(None)` means the service has no entry for the word.
    async fn fetch_entries(&self, word: &str) -> Result<Option<Vec<DictEntry>>> {
        let response = self
            .client
            .get(self.entry_url(word)?)
            .send()
            .await
            .context("Failed to send request to dictionary service")?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let entries = response
            .json::<Vec<DictEntry>>()
            .await
            .context("Failed to parse dictionary response")?;

        Ok(Some(entries))
    }
}

#[async_trait::async_trait]
impl DefinitionProvider for DictionaryClient {
    async fn lookup(&self, word: &str) -> Option<ResolvedDefinition> {
        match self.fetch_entries(word).await {
            Ok(Some(entries)) => {
                let resolved = resolve_entries(&entries, self.tagging);
                if resolved.is_none() {
                    tracing::warn!("Invalid data structure for word: {}", word);
                }
                resolved
            }
            Ok(None) => {
                tracing::info!("No definition found for word: {}", word);
                None
            }
            Err(e) => {
                tracing::error!("Error fetching definition for word {}: {:#}", word, e);
                None
            }
        }
    }
}
