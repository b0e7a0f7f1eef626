use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct DictionaryConfig {
    /// Lookup service base URL
    pub endpoint: String,
    /// Derive topical tags and write the Language field on updates
    pub tags: bool,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let tags = env::var("DICTIONARY_TAGS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Self {
            endpoint: env::var("DICTIONARY_ENDPOINT")
                .unwrap_or_else(|_| "https://api.dictionaryapi.dev/api/v2".to_string()),
            tags,
        }
    }
}
