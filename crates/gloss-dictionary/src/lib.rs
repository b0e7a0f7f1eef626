mod client;
mod response;

pub use client::DictionaryClient;
pub use response::{DictEntry, Meaning, SenseDefinition, resolve_entries};
