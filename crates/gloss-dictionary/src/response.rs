use gloss_core::tags::generate_tags;
use gloss_core::types::{ResolvedDefinition, capitalize};
use serde::Deserialize;

/// One entry as returned by the lookup service.
#[derive(Debug, Deserialize)]
pub struct DictEntry {
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// One part-of-speech sense group of an entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<SenseDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SenseDefinition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
}

/// Extract the first sense of the first entry.
///
/// Returns `None` when the response carries no entry or no meaning group.
/// Missing fields inside the first sense degrade to empty strings.
pub fn resolve_entries(entries: &[DictEntry], tagging: bool) -> Option<ResolvedDefinition> {
    let meaning = entries.first()?.meanings.first()?;
    let sense = meaning.definitions.first();

    let definition = sense.map(|s| s.definition.clone()).unwrap_or_default();
    let example = sense.map(|s| s.example.clone()).unwrap_or_default();

    let tags = if tagging {
        generate_tags(&meaning.part_of_speech, &definition)
    } else {
        Vec::new()
    };

    Some(ResolvedDefinition {
        definition,
        example,
        part_of_speech: capitalize(&meaning.part_of_speech),
        synonyms: meaning.synonyms.join(", "),
        antonyms: meaning.antonyms.join(", "),
        tags,
    })
}
