//! Tool handlers
//!
//! A handler receives arguments that already satisfy its tool's schema, calls
//! the library gateway, and normalizes the response. Handlers never render
//! text and never catch failures; both happen in the dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
use sefaria_domain::library::{
    self, NormalizedResult, SnippetExtractor, decode_path_filter, lexicon_filters,
};
use sefaria_domain::tool::value_objects::{ResolvedArguments, ToolError};
use tracing::debug;

use super::catalog::DEFAULT_SEARCH_SIZE;
use crate::ports::calendar::CalendarPort;
use crate::ports::library_gateway::{LibraryGateway, LibraryRequest, SearchQuery, VersionLanguage};

/// Executes one tool against resolved arguments
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle(&self, args: &ResolvedArguments) -> Result<NormalizedResult, ToolError>;
}

/// Builds the gateway request for a passthrough tool
pub type RequestBuilder = fn(&ResolvedArguments) -> Result<LibraryRequest, ToolError>;

/// Returns the upstream JSON unchanged
pub struct PassthroughHandler {
    gateway: Arc<dyn LibraryGateway>,
    build: RequestBuilder,
}

impl PassthroughHandler {
    pub fn new(gateway: Arc<dyn LibraryGateway>, build: RequestBuilder) -> Self {
        Self { gateway, build }
    }
}

#[async_trait]
impl ToolHandler for PassthroughHandler {
    async fn handle(&self, args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
        let request = (self.build)(args)?;
        let payload = self.gateway.fetch(&request).await?;
        Ok(NormalizedResult::Passthrough(payload))
    }
}

pub fn links_request(args: &ResolvedArguments) -> Result<LibraryRequest, ToolError> {
    Ok(LibraryRequest::Links {
        reference: args.require_str("reference")?.to_string(),
        with_text: args.get_str("with_text") == Some("1"),
    })
}

pub fn name_request(args: &ResolvedArguments) -> Result<LibraryRequest, ToolError> {
    Ok(LibraryRequest::Name {
        name: args.require_str("name")?.to_string(),
        limit: args.get_i64("limit"),
        type_filter: args.get_str("type_filter").map(str::to_string),
    })
}

pub fn shape_request(args: &ResolvedArguments) -> Result<LibraryRequest, ToolError> {
    Ok(LibraryRequest::Shape {
        name: args.require_str("name")?.to_string(),
    })
}

pub fn index_request(args: &ResolvedArguments) -> Result<LibraryRequest, ToolError> {
    Ok(LibraryRequest::Index {
        title: args.require_str("title")?.to_string(),
    })
}

pub fn topic_request(args: &ResolvedArguments) -> Result<LibraryRequest, ToolError> {
    Ok(LibraryRequest::Topic {
        slug: args.require_str("topic_slug")?.to_string(),
        with_links: args.get_bool("with_links").unwrap_or(false),
        with_refs: args.get_bool("with_refs").unwrap_or(false),
    })
}

pub fn manuscripts_request(args: &ResolvedArguments) -> Result<LibraryRequest, ToolError> {
    Ok(LibraryRequest::Manuscripts {
        reference: args.require_str("reference")?.to_string(),
    })
}

/// `get_text`: projects version lists
pub struct TextHandler {
    gateway: Arc<dyn LibraryGateway>,
}

impl TextHandler {
    pub fn new(gateway: Arc<dyn LibraryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ToolHandler for TextHandler {
    async fn handle(&self, args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
        let request = LibraryRequest::Text {
            reference: args.require_str("reference")?.to_string(),
            language: args.get_str("version_language").and_then(VersionLanguage::parse),
        };
        let payload = self.gateway.fetch(&request).await?;
        Ok(NormalizedResult::Text(library::project_text(payload)?))
    }
}

/// `get_english_translations`
pub struct EnglishTranslationsHandler {
    gateway: Arc<dyn LibraryGateway>,
}

impl EnglishTranslationsHandler {
    pub fn new(gateway: Arc<dyn LibraryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ToolHandler for EnglishTranslationsHandler {
    async fn handle(&self, args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
        let reference = args.require_str("reference")?;
        let request = LibraryRequest::EnglishVersions {
            reference: reference.to_string(),
        };
        let payload = self.gateway.fetch(&request).await?;
        Ok(NormalizedResult::Translations(library::english_translations(
            reference, payload,
        )?))
    }
}

/// `get_situational_info`: calendars payload plus today's Hebrew date
pub struct SituationalInfoHandler {
    gateway: Arc<dyn LibraryGateway>,
    calendar: Arc<dyn CalendarPort>,
}

impl SituationalInfoHandler {
    pub fn new(gateway: Arc<dyn LibraryGateway>, calendar: Arc<dyn CalendarPort>) -> Self {
        Self { gateway, calendar }
    }
}

#[async_trait]
impl ToolHandler for SituationalInfoHandler {
    async fn handle(&self, _args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
        let payload = self.gateway.fetch(&LibraryRequest::Calendars).await?;
        NormalizedResult::situational(payload, self.calendar.current_hebrew_date())
    }
}

fn search_size(args: &ResolvedArguments) -> u32 {
    let size = args.get_i64("size").unwrap_or(DEFAULT_SEARCH_SIZE);
    // Non-positive sizes fall back to the default
    if size <= 0 {
        return DEFAULT_SEARCH_SIZE as u32;
    }
    u32::try_from(size).unwrap_or(u32::MAX)
}

/// `search_texts`
pub struct SearchTextsHandler {
    gateway: Arc<dyn LibraryGateway>,
    extractor: SnippetExtractor,
}

impl SearchTextsHandler {
    pub fn new(gateway: Arc<dyn LibraryGateway>) -> Self {
        Self {
            gateway,
            extractor: SnippetExtractor::default(),
        }
    }
}

#[async_trait]
impl ToolHandler for SearchTextsHandler {
    async fn handle(&self, args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
        let query = args.require_str("query")?;
        let search = SearchQuery::new(query, search_size(args)).with_filters(args.get_filters("filters"));
        let payload = self.gateway.search(&search).await?;
        let results = library::normalize_search(payload, &self.extractor)?;
        Ok(NormalizedResult::search(query, results))
    }
}

/// `search_in_book`: resolves the book's path, then searches inside it
pub struct SearchInBookHandler {
    gateway: Arc<dyn LibraryGateway>,
    extractor: SnippetExtractor,
}

impl SearchInBookHandler {
    pub fn new(gateway: Arc<dyn LibraryGateway>) -> Self {
        Self {
            gateway,
            extractor: SnippetExtractor::default(),
        }
    }
}

#[async_trait]
impl ToolHandler for SearchInBookHandler {
    async fn handle(&self, args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
        let query = args.require_str("query")?;
        let book_name = args.require_str("book_name")?;

        let path = resolve_path_filter(self.gateway.as_ref(), book_name).await?;
        debug!(book = book_name, path = %path, "Resolved book search path");

        let search = SearchQuery::new(query, search_size(args)).with_filters(vec![path]);
        let payload = self.gateway.search(&search).await?;
        let results = library::normalize_search(payload, &self.extractor)?;
        Ok(NormalizedResult::search(query, results))
    }
}

async fn resolve_path_filter(gateway: &dyn LibraryGateway, book_name: &str) -> Result<String, ToolError> {
    let request = LibraryRequest::SearchPathFilter {
        book_name: book_name.to_string(),
    };
    let payload = gateway.fetch(&request).await?;
    decode_path_filter(book_name, payload)
}

/// `get_search_path_filter`
pub struct PathFilterHandler {
    gateway: Arc<dyn LibraryGateway>,
}

impl PathFilterHandler {
    pub fn new(gateway: Arc<dyn LibraryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ToolHandler for PathFilterHandler {
    async fn handle(&self, args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
        let book_name = args.require_str("book_name")?;
        let path = resolve_path_filter(self.gateway.as_ref(), book_name).await?;
        Ok(NormalizedResult::PathFilter(path))
    }
}

/// `search_dictionaries`: searches the fixed lexicon set
pub struct DictionaryHandler {
    gateway: Arc<dyn LibraryGateway>,
    size: u32,
}

impl DictionaryHandler {
    pub fn new(gateway: Arc<dyn LibraryGateway>, size: u32) -> Self {
        Self { gateway, size }
    }
}

#[async_trait]
impl ToolHandler for DictionaryHandler {
    async fn handle(&self, args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
        let query = args.require_str("query")?;
        let search = SearchQuery::new(query, self.size).with_filters(lexicon_filters());
        let payload = self.gateway.search(&search).await?;
        let entries = library::normalize_dictionary(payload)?;
        debug!(count = entries.len(), "Dictionary search results");
        Ok(NormalizedResult::Dictionary(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn args(value: Value) -> ResolvedArguments {
        let map: Map<String, Value> = value.as_object().cloned().unwrap();
        ResolvedArguments::from_map(map)
    }

    #[test]
    fn test_links_request() {
        let request = links_request(&args(json!({"reference": "Genesis 1:1", "with_text": "1"}))).unwrap();
        assert_eq!(
            request,
            LibraryRequest::Links {
                reference: "Genesis 1:1".into(),
                with_text: true
            }
        );

        let request = links_request(&args(json!({"reference": "Genesis 1:1", "with_text": "0"}))).unwrap();
        assert!(matches!(request, LibraryRequest::Links { with_text: false, .. }));
    }

    #[test]
    fn test_name_request_optional_fields() {
        let request = name_request(&args(json!({"name": "Gen", "limit": null, "type_filter": null}))).unwrap();
        assert_eq!(
            request,
            LibraryRequest::Name {
                name: "Gen".into(),
                limit: None,
                type_filter: None
            }
        );

        let request = name_request(&args(json!({"name": "Gen", "limit": 5, "type_filter": "ref"}))).unwrap();
        assert_eq!(
            request,
            LibraryRequest::Name {
                name: "Gen".into(),
                limit: Some(5),
                type_filter: Some("ref".into())
            }
        );
    }

    #[test]
    fn test_topic_request_flags() {
        let request = topic_request(&args(json!({"topic_slug": "moses", "with_links": true, "with_refs": false}))).unwrap();
        assert_eq!(
            request,
            LibraryRequest::Topic {
                slug: "moses".into(),
                with_links: true,
                with_refs: false
            }
        );
    }

    #[test]
    fn test_search_size_fallback() {
        assert_eq!(search_size(&args(json!({"size": 5}))), 5);
        assert_eq!(search_size(&args(json!({"size": 0}))), 10);
        assert_eq!(search_size(&args(json!({"size": -3}))), 10);
        assert_eq!(search_size(&args(json!({}))), 10);
    }
}
