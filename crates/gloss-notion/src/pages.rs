use chrono::NaiveDate;
use gloss_core::types::ResolvedDefinition;
use serde::Deserialize;
use serde_json::{Value, json};

/// One page of database query results.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: PageProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageProperties {
    #[serde(rename = "Word", default)]
    pub word: TitleProperty,
}

#[derive(Debug, Default, Deserialize)]
pub struct TitleProperty {
    #[serde(default)]
    pub title: Vec<TitleText>,
}

#[derive(Debug, Deserialize)]
pub struct TitleText {
    #[serde(default)]
    pub plain_text: String,
}

impl Page {
    /// Headword from the first title fragment, if the page carries one.
    pub fn headword(&self) -> Option<&str> {
        self.properties
            .word
            .title
            .first()
            .map(|text| text.plain_text.as_str())
            .filter(|text| !text.is_empty())
    }
}

/// Filter matching records with an empty definition and a non-empty headword.
pub fn pending_filter() -> Value {
    json!({
        "and": [
            { "property": "Definition", "rich_text": { "is_empty": true } },
            { "property": "Word", "title": { "is_not_empty": true } }
        ]
    })
}

fn rich_text(content: &str) -> Value {
    json!({ "rich_text": [{ "text": { "content": content } }] })
}

/// Property map for the page update.
///
/// Tags and Language are written only when tags were derived, so runs with
/// tagging disabled leave both fields untouched.
pub fn update_properties(resolved: &ResolvedDefinition, date_added: NaiveDate) -> Value {
    let mut properties = json!({
        "Definition": rich_text(&resolved.definition),
        "Example Sentence": rich_text(&resolved.example),
        "Part of Speech": { "select": { "name": resolved.part_of_speech } },
        "Synonyms": rich_text(&resolved.synonyms),
        "Antonyms": rich_text(&resolved.antonyms),
        "Date Added": { "date": { "start": date_added.format("%Y-%m-%d").to_string() } }
    });

    if !resolved.tags.is_empty() {
        let tags = resolved
            .tags
            .iter()
            .map(|tag| json!({ "name": tag }))
            .collect::<Vec<_>>();
        properties["Tags"] = json!({ "multi_select": tags });
        properties["Language"] = json!({ "select": { "name": "English" } });
    }

    properties
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use gloss_core::types::ResolvedDefinition;
    use serde_json::json;

    use super::{QueryResponse, pending_filter, update_properties};

    #[test]
    fn parses_query_results() {
        let payload = r#"{
            "object": "list",
            "results": [
                {
                    "id": "p1",
                    "properties": {
                        "Word": { "title": [{ "plain_text": "ephemeral" }] }
                    }
                },
                {
                    "id": "p2",
                    "properties": { "Word": { "title": [] } }
                }
            ],
            "has_more": true
        }"#;

        let response: QueryResponse = serde_json::from_str(payload).expect("payload should parse");

        assert!(response.has_more);
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].headword(), Some("ephemeral"));
        assert_eq!(response.results[1].headword(), None);
    }

    #[test]
    fn filter_requires_empty_definition_and_set_headword() {
        assert_eq!(
            pending_filter(),
            json!({
                "and": [
                    { "property": "Definition", "rich_text": { "is_empty": true } },
                    { "property": "Word", "title": { "is_not_empty": true } }
                ]
            })
        );
    }

    fn resolved() -> ResolvedDefinition {
        ResolvedDefinition {
            definition: "lasting for a very short time".to_string(),
            example: "fame is ephemeral".to_string(),
            part_of_speech: "Adjective".to_string(),
            synonyms: "transient".to_string(),
            antonyms: String::new(),
            tags: vec!["Adjective".to_string(), "General".to_string()],
        }
    }

    #[test]
    fn writes_all_fields_with_tags_and_language() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).expect("valid date");
        let properties = update_properties(&resolved(), date);

        assert_eq!(
            properties["Definition"]["rich_text"][0]["text"]["content"],
            "lasting for a very short time"
        );
        assert_eq!(
            properties["Example Sentence"]["rich_text"][0]["text"]["content"],
            "fame is ephemeral"
        );
        assert_eq!(properties["Part of Speech"]["select"]["name"], "Adjective");
        assert_eq!(properties["Synonyms"]["rich_text"][0]["text"]["content"], "transient");
        assert_eq!(properties["Antonyms"]["rich_text"][0]["text"]["content"], "");
        assert_eq!(properties["Date Added"]["date"]["start"], "2026-08-04");
        assert_eq!(
            properties["Tags"]["multi_select"],
            json!([{ "name": "Adjective" }, { "name": "General" }])
        );
        assert_eq!(properties["Language"]["select"]["name"], "English");
    }

    #[test]
    fn omits_tags_and_language_when_no_tags_derived() {
        let mut plain = resolved();
        plain.tags.clear();

        let date = NaiveDate::from_ymd_opt(2026, 8, 4).expect("valid date");
        let properties = update_properties(&plain, date);

        assert!(properties.get("Tags").is_none());
        assert!(properties.get("Language").is_none());
        assert_eq!(properties["Part of Speech"]["select"]["name"], "Adjective");
    }
}
