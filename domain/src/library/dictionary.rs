//! Dictionary search entries

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::search::{SearchHit, decode_search};
use crate::tool::value_objects::ToolError;

/// Lexicon category paths searched by `search_dictionaries`, with the display
/// name reported for each.
pub const LEXICONS: &[(&str, &str)] = &[
    ("Reference/Dictionary/Jastrow", "Jastrow Dictionary"),
    ("Reference/Dictionary/Klein Dictionary", "Klein Dictionary"),
    ("Reference/Dictionary/BDB", "BDB Dictionary"),
    ("Reference/Dictionary/BDB Aramaic", "BDB Aramaic Dictionary"),
    (
        "Reference/Encyclopedic Works/Kovetz Yesodot VaChakirot",
        "Kovetz Yesodot VaChakirot",
    ),
];

/// Search filters covering every lexicon, in [`LEXICONS`] order.
pub fn lexicon_filters() -> Vec<String> {
    LEXICONS.iter().map(|(path, _)| path.to_string()).collect()
}

/// Display name for a lexicon category path.
pub fn lexicon_name(path: &str) -> Option<&'static str> {
    LEXICONS
        .iter()
        .find(|(candidate, _)| *candidate == path)
        .map(|(_, name)| *name)
}

/// One dictionary hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(rename = "ref")]
    pub reference: String,
    pub headword: String,
    pub lexicon_name: String,
    pub text: String,
}

impl DictionaryEntry {
    pub fn from_hit(hit: &SearchHit) -> Self {
        let source = &hit.source;
        let path = source.path.as_deref().unwrap_or_default();
        Self {
            reference: source.reference.clone(),
            headword: source.title_variants.first().cloned().unwrap_or_default(),
            lexicon_name: lexicon_name(path).unwrap_or(path).to_string(),
            text: source.text_field("exact").unwrap_or_default().to_string(),
        }
    }
}

/// Decode a dictionary search payload into entries, in upstream order.
pub fn normalize_dictionary(payload: Value) -> Result<Vec<DictionaryEntry>, ToolError> {
    let response = decode_search(payload)?;
    Ok(response.into_hits().iter().map(DictionaryEntry::from_hit).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lexicon_lookup() {
        assert_eq!(lexicon_name("Reference/Dictionary/BDB"), Some("BDB Dictionary"));
        assert_eq!(lexicon_name("Reference/Dictionary/Unknown"), None);
        assert_eq!(lexicon_filters().len(), LEXICONS.len());
        assert_eq!(lexicon_filters()[0], "Reference/Dictionary/Jastrow");
    }

    #[test]
    fn test_normalize_dictionary() {
        let payload = json!({
            "hits": {
                "total": 2,
                "hits": [
                    {"_source": {
                        "ref": "Jastrow, אָב 1",
                        "titleVariants": ["אָב", "אב"],
                        "path": "Reference/Dictionary/Jastrow",
                        "exact": "father"
                    }},
                    {"_source": {
                        "ref": "Other 1",
                        "path": "Reference/Dictionary/Other"
                    }}
                ]
            }
        });

        let entries = normalize_dictionary(payload).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            serde_json::to_value(&entries[0]).unwrap(),
            json!({
                "ref": "Jastrow, אָב 1",
                "headword": "אָב",
                "lexicon_name": "Jastrow Dictionary",
                "text": "father"
            })
        );
        assert_eq!(entries[1].headword, "");
        assert_eq!(entries[1].lexicon_name, "Reference/Dictionary/Other");
        assert_eq!(entries[1].text, "");
    }

    #[test]
    fn test_normalize_dictionary_empty() {
        assert!(normalize_dictionary(json!({"hits": {"hits": []}})).unwrap().is_empty());
    }
}
