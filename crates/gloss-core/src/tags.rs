use crate::types::capitalize;

const ACADEMIC_KEYWORDS: &[&str] = &[
    "theory", "concept", "framework", "analysis", "research", "scholarly", "academic", "study",
    "science",
];

const TECH_KEYWORDS: &[&str] = &[
    "technology", "digital", "computer", "software", "hardware", "device", "technical", "system",
    "data",
];

const LITERARY_KEYWORDS: &[&str] = &[
    "literary", "novel", "poem", "writer", "narrative", "character", "fiction", "literature",
    "story",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "business", "finance", "economic", "market", "trade", "company", "corporate", "commercial",
    "management",
];

const CATEGORIES: &[(&str, &[&str])] = &[
    ("Academic", ACADEMIC_KEYWORDS),
    ("Technology", TECH_KEYWORDS),
    ("Literature", LITERARY_KEYWORDS),
    ("Business", BUSINESS_KEYWORDS),
];

/// Derive topical tags for a definition.
///
/// The capitalized part of speech comes first, then one tag per keyword
/// category matching the definition text, then a "General" fallback when
/// fewer than two tags were collected. Duplicates keep their first position.
pub fn generate_tags(part_of_speech: &str, definition: &str) -> Vec<String> {
    let mut tags = Vec::new();

    if !part_of_speech.is_empty() {
        tags.push(capitalize(part_of_speech));
    }

    let lowered = definition.to_lowercase();
    for (tag, keywords) in CATEGORIES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            tags.push((*tag).to_string());
        }
    }

    if tags.len() <= 1 {
        tags.push("General".to_string());
    }

    let mut unique = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::generate_tags;

    #[test]
    fn keyword_match_assigns_category() {
        let tags = generate_tags("", "a program or piece of software");
        assert!(tags.contains(&"Technology".to_string()));

        let tags = generate_tags("", "a long novel about whaling");
        assert!(tags.contains(&"Literature".to_string()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let tags = generate_tags("", "SOFTWARE used at sea");
        assert!(tags.contains(&"Technology".to_string()));
    }

    #[test]
    fn multiple_categories_suppress_fallback() {
        let tags = generate_tags("", "a novel piece of software");
        assert_eq!(tags, vec!["Technology", "Literature"]);
    }

    #[test]
    fn no_match_and_no_part_of_speech_falls_back_to_general() {
        let tags = generate_tags("", "lasting for a very short time");
        assert_eq!(tags, vec!["General"]);
    }

    #[test]
    fn part_of_speech_tag_comes_first() {
        let tags = generate_tags("adjective", "lasting for a very short time");
        assert_eq!(tags, vec!["Adjective", "General"]);
    }

    #[test]
    fn duplicate_tags_keep_first_position() {
        let tags = generate_tags("academic", "academic research on frogs");
        assert_eq!(tags, vec!["Academic"]);
    }
}
