use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::notion::NotionConfig;

pub mod dictionary;
pub mod notion;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub notion: NotionConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            notion: NotionConfig::new(),
            dictionary: DictionaryConfig::new(),
        }
    }
}
