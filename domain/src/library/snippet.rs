//! Snippet selection for search hits

use serde_json::Value;

use super::search::SearchHit;
use crate::util::truncate_chars;

/// Plain source fields tried, in order, when a hit carries no highlights.
pub const PLAIN_SNIPPET_FIELDS: &[&str] = &["naive_lemmatizer", "exact"];

/// Separator placed between highlight fragments
pub const FRAGMENT_SEPARATOR: &str = " [...] ";

/// Maximum length of a snippet taken from plain content, in characters
pub const MAX_PLAIN_SNIPPET_CHARS: usize = 300;

const ELLIPSIS: &str = "...";

/// Picks one human-readable excerpt for a search hit.
///
/// Priority:
/// 1. the first highlight field (upstream order) with a non-empty fragment
///    list, fragments joined by [`FRAGMENT_SEPARATOR`], never truncated;
///    skipped when the joined text is empty
/// 2. the first non-empty string among the plain fields, truncated to
///    [`MAX_PLAIN_SNIPPET_CHARS`] with `...` appended when cut
/// 3. an empty string
#[derive(Debug, Clone)]
pub struct SnippetExtractor {
    plain_fields: Vec<String>,
    max_chars: usize,
}

impl Default for SnippetExtractor {
    fn default() -> Self {
        Self::new(PLAIN_SNIPPET_FIELDS.iter().copied())
    }
}

impl SnippetExtractor {
    pub fn new<I, S>(plain_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plain_fields: plain_fields.into_iter().map(Into::into).collect(),
            max_chars: MAX_PLAIN_SNIPPET_CHARS,
        }
    }

    pub fn plain_fields(&self) -> &[String] {
        &self.plain_fields
    }

    pub fn extract(&self, hit: &SearchHit) -> String {
        if let Some(snippet) = Self::from_highlight(hit).filter(|s| !s.is_empty()) {
            return snippet;
        }
        self.from_plain(hit).unwrap_or_default()
    }

    fn from_highlight(hit: &SearchHit) -> Option<String> {
        hit.highlight.values().find_map(|fragments| {
            let parts: Vec<&str> = match fragments {
                Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                Value::String(s) => vec![s.as_str()],
                _ => Vec::new(),
            };
            (!parts.is_empty()).then(|| parts.join(FRAGMENT_SEPARATOR))
        })
    }

    fn from_plain(&self, hit: &SearchHit) -> Option<String> {
        self.plain_fields.iter().find_map(|field| {
            let content = hit.source.text_field(field)?;
            let (head, truncated) = truncate_chars(content, self.max_chars);
            Some(if truncated {
                format!("{}{}", head, ELLIPSIS)
            } else {
                head.to_string()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(value: Value) -> SearchHit {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_highlight_wins_over_plain() {
        let h = hit(json!({
            "_source": {"exact": "c".repeat(500)},
            "highlight": {"text": ["a", "b"]}
        }));
        assert_eq!(SnippetExtractor::default().extract(&h), "a [...] b");
    }

    #[test]
    fn test_plain_truncated_with_ellipsis() {
        let h = hit(json!({"_source": {"exact": "c".repeat(500)}}));
        let snippet = SnippetExtractor::default().extract(&h);
        assert_eq!(snippet, format!("{}...", "c".repeat(300)));
    }

    #[test]
    fn test_plain_not_truncated_at_limit() {
        let h = hit(json!({"_source": {"exact": "c".repeat(300)}}));
        assert_eq!(SnippetExtractor::default().extract(&h), "c".repeat(300));
    }

    #[test]
    fn test_nothing_yields_empty() {
        let h = hit(json!({"_source": {"ref": "Genesis 1:1"}}));
        assert_eq!(SnippetExtractor::default().extract(&h), "");
    }

    #[test]
    fn test_first_non_empty_highlight_field_in_upstream_order() {
        let h = hit(json!({
            "_source": {},
            "highlight": {"naive_lemmatizer": [], "exact": ["<b>x</b>"], "text": ["y"]}
        }));
        assert_eq!(SnippetExtractor::default().extract(&h), "<b>x</b>");

        let h = hit(json!({
            "_source": {},
            "highlight": {"text": ["y"], "exact": ["<b>x</b>"]}
        }));
        assert_eq!(SnippetExtractor::default().extract(&h), "y");
    }

    #[test]
    fn test_highlight_fragments_are_not_truncated() {
        let long = "h".repeat(800);
        let h = hit(json!({"_source": {}, "highlight": {"exact": [long.clone()]}}));
        assert_eq!(SnippetExtractor::default().extract(&h), long);
    }

    #[test]
    fn test_plain_priority_order() {
        let h = hit(json!({"_source": {"exact": "second", "naive_lemmatizer": "first"}}));
        assert_eq!(SnippetExtractor::default().extract(&h), "first");

        let h = hit(json!({"_source": {"exact": "second", "naive_lemmatizer": ""}}));
        assert_eq!(SnippetExtractor::default().extract(&h), "second");

        let reversed = SnippetExtractor::new(["exact", "naive_lemmatizer"]);
        let h = hit(json!({"_source": {"exact": "second", "naive_lemmatizer": "first"}}));
        assert_eq!(reversed.extract(&h), "second");
    }

    #[test]
    fn test_empty_highlights_fall_back_to_plain() {
        let h = hit(json!({"_source": {"exact": "plain"}, "highlight": {"exact": []}}));
        assert_eq!(SnippetExtractor::default().extract(&h), "plain");
    }

    #[test]
    fn test_blank_highlight_fragments_fall_back_to_plain() {
        let h = hit(json!({
            "highlight": {"exact": [""]},
            "_source": {"exact": "plain content"}
        }));
        assert_eq!(SnippetExtractor::default().extract(&h), "plain content");
    }

    #[test]
    fn test_non_string_plain_field_skipped() {
        let h = hit(json!({"_source": {"naive_lemmatizer": ["x"], "exact": "plain"}}));
        assert_eq!(SnippetExtractor::default().extract(&h), "plain");
    }

    #[test]
    fn test_truncation_counts_characters() {
        let h = hit(json!({"_source": {"exact": "ש".repeat(301)}}));
        let snippet = SnippetExtractor::default().extract(&h);
        assert_eq!(snippet.chars().count(), 303);
        assert!(snippet.ends_with("..."));
    }
}
