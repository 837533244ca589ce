//! Search response decoding
//!
//! The search endpoint returns Elasticsearch-shaped JSON:
//!
//! ```json
//! {"hits": {"total": {"value": 3}, "hits": [{"_source": {...}, "highlight": {...}}]}}
//! ```
//!
//! `total` has been observed both as a bare integer and as `{"value": N}`.
//! Neither shape is surfaced to callers; both must simply decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use super::snippet::SnippetExtractor;
use crate::tool::value_objects::ToolError;

/// Top-level search payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Option<SearchHits>,
}

impl SearchResponse {
    /// Hits in upstream order; empty when the payload carried no hit data.
    pub fn into_hits(self) -> Vec<SearchHit> {
        self.hits.map(|h| h.hits).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub total: Option<SearchTotal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hits: Vec<SearchHit>,
}

/// Total hit count in either of its upstream encodings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchTotal {
    Count(u64),
    Object { value: u64 },
    Unrecognized(Value),
}

impl SearchTotal {
    pub fn value(&self) -> Option<u64> {
        match self {
            SearchTotal::Count(n) | SearchTotal::Object { value: n } => Some(*n),
            SearchTotal::Unrecognized(_) => None,
        }
    }
}

/// One upstream search hit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_source", default, deserialize_with = "null_as_default")]
    pub source: HitSource,
    /// Field name → highlighted fragments, in upstream order
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlight: Map<String, Value>,
}

/// The `_source` document of a hit
///
/// Named fields are the ones the normalizers read directly. Everything else
/// (including the plain snippet candidates such as `exact`) lands in
/// `fields`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitSource {
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub reference: String,
    #[serde(rename = "heRef", default)]
    pub hebrew_reference: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(rename = "titleVariants", default, deserialize_with = "null_as_default")]
    pub title_variants: Vec<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl HitSource {
    /// A non-empty string field from the remaining source fields.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Stable output shape of one search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSearchResult {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "heRef")]
    pub hebrew_reference: Option<String>,
    pub categories: Vec<String>,
    #[serde(rename = "text_snippet")]
    pub snippet: String,
}

impl NormalizedSearchResult {
    pub fn from_hit(hit: &SearchHit, extractor: &SnippetExtractor) -> Self {
        Self {
            reference: hit.source.reference.clone(),
            hebrew_reference: hit.source.hebrew_reference.clone(),
            categories: hit.source.categories.clone(),
            snippet: extractor.extract(hit),
        }
    }
}

/// Decode a raw search payload.
pub fn decode_search(payload: Value) -> Result<SearchResponse, ToolError> {
    serde_json::from_value(payload)
        .map_err(|e| ToolError::upstream_malformed(format!("Unexpected search response: {}", e)))
}

/// Decode a raw search payload into normalized results, in upstream order.
pub fn normalize_search(
    payload: Value,
    extractor: &SnippetExtractor,
) -> Result<Vec<NormalizedSearchResult>, ToolError> {
    let response = decode_search(payload)?;
    Ok(response
        .into_hits()
        .iter()
        .map(|hit| NormalizedSearchResult::from_hit(hit, extractor))
        .collect())
}

/// Decode the search-path-filter payload for `book_name`.
///
/// The service answers with a bare JSON string on success and with an
/// `{"error": ...}` object (or an empty string) for unknown books.
pub fn decode_path_filter(book_name: &str, payload: Value) -> Result<String, ToolError> {
    match payload {
        Value::String(path) if !path.trim().is_empty() => Ok(path),
        Value::String(_) | Value::Null => Err(not_found(book_name)),
        Value::Object(map) if map.contains_key("error") => Err(not_found(book_name)),
        other => Err(ToolError::upstream_malformed(format!(
            "Unexpected search path filter response for '{}': {}",
            book_name, other
        ))),
    }
}

fn not_found(book_name: &str) -> ToolError {
    ToolError::not_found(format!("No search path found for book '{}'", book_name))
}
