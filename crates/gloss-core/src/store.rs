use chrono::NaiveDate;

use crate::types::{ResolvedDefinition, WordRecord};

/// Vocabulary record store operations
#[async_trait::async_trait]
pub trait WordStore: Send + Sync {
    /// Records whose definition is empty and whose headword is set
    async fn pending_words(&self) -> Result<Vec<WordRecord>, StoreError>;

    /// Write resolved lexical data into one record as a single update
    async fn fill_definition(
        &self,
        record: &WordRecord,
        resolved: &ResolvedDefinition,
        date_added: NaiveDate,
    ) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
