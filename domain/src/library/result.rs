//! Normalized tool output

use serde_json::{Map, Value};

use super::dictionary::DictionaryEntry;
use super::search::NormalizedSearchResult;
use super::texts::EnglishTranslations;
use crate::tool::value_objects::ToolError;

/// Key added to the calendars payload by `get_situational_info`
pub const HEBREW_DATE_KEY: &str = "Hebrew Date";

/// Tool-specific payload produced by a successful handler.
///
/// Each variant carries only the fields its tool promises. Rendering to text
/// happens once, at the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedResult {
    /// Non-empty search result list
    SearchResults(Vec<NormalizedSearchResult>),
    /// Search that matched nothing; a success, not an error
    NoResults { query: String },
    /// Text payload with projected version lists
    Text(Map<String, Value>),
    Translations(EnglishTranslations),
    Dictionary(Vec<DictionaryEntry>),
    /// Resolved category path for a book
    PathFilter(String),
    /// Upstream JSON, unmodified
    Passthrough(Value),
}

impl NormalizedResult {
    /// Wrap search results, using [`NormalizedResult::NoResults`] when empty.
    pub fn search(query: &str, results: Vec<NormalizedSearchResult>) -> Self {
        if results.is_empty() {
            NormalizedResult::NoResults {
                query: query.to_string(),
            }
        } else {
            NormalizedResult::SearchResults(results)
        }
    }

    /// Calendars payload with the current Hebrew date added.
    pub fn situational(payload: Value, hebrew_date: impl Into<String>) -> Result<Self, ToolError> {
        let Value::Object(mut data) = payload else {
            return Err(ToolError::upstream_malformed(
                "Expected an object from the calendars endpoint",
            ));
        };
        data.insert(HEBREW_DATE_KEY.to_string(), Value::String(hebrew_date.into()));
        Ok(NormalizedResult::Passthrough(Value::Object(data)))
    }

    pub fn is_empty_search(&self) -> bool {
        matches!(self, NormalizedResult::NoResults { .. })
    }

    /// Render the payload as the text returned to the caller.
    ///
    /// JSON payloads are pretty-printed; the empty-search indicator and path
    /// filters are plain strings.
    pub fn render(&self) -> Result<String, ToolError> {
        let encoded = match self {
            NormalizedResult::NoResults { query } => {
                return Ok(format!("No results found for '{}'.", query));
            }
            NormalizedResult::PathFilter(path) => return Ok(path.clone()),
            NormalizedResult::SearchResults(results) => serde_json::to_string_pretty(results),
            NormalizedResult::Text(data) => serde_json::to_string_pretty(data),
            NormalizedResult::Translations(translations) => serde_json::to_string_pretty(translations),
            NormalizedResult::Dictionary(entries) => serde_json::to_string_pretty(entries),
            NormalizedResult::Passthrough(value) => serde_json::to_string_pretty(value),
        };
        encoded.map_err(|e| ToolError::upstream_malformed(format!("Failed to encode response: {}", e)))
    }
}
