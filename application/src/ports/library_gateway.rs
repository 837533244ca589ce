//! Library Gateway port
//!
//! Defines the interface for reaching the text-library service. The
//! application layer describes *what* it wants as a [`LibraryRequest`] or
//! [`SearchQuery`]; the adapter owns URLs, encoding and HTTP.

use async_trait::async_trait;
use sefaria_domain::tool::value_objects::ToolError;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the library service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Network failure or non-success HTTP status
    #[error("Upstream service unavailable: {0}")]
    Unavailable(String),

    /// Body could not be parsed as JSON
    #[error("Malformed upstream response: {0}")]
    Malformed(String),

    /// The service reported that the entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<GatewayError> for ToolError {
    fn from(err: GatewayError) -> Self {
        let message = err.to_string();
        match err {
            GatewayError::Unavailable(_) => ToolError::upstream_unavailable(message),
            GatewayError::Malformed(_) => ToolError::upstream_malformed(message),
            GatewayError::NotFound(_) => ToolError::not_found(message),
        }
    }
}

/// Which text versions to request for a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionLanguage {
    Source,
    English,
    Both,
}

impl VersionLanguage {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "source" => Some(VersionLanguage::Source),
            "english" => Some(VersionLanguage::English),
            "both" => Some(VersionLanguage::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VersionLanguage::Source => "source",
            VersionLanguage::English => "english",
            VersionLanguage::Both => "both",
        }
    }
}

/// A read request against the library service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryRequest {
    /// Text of a reference; `None` requests every version
    Text {
        reference: String,
        language: Option<VersionLanguage>,
    },
    /// All English versions of a reference
    EnglishVersions { reference: String },
    /// Today's learning schedule
    Calendars,
    Links { reference: String, with_text: bool },
    Name {
        name: String,
        limit: Option<i64>,
        type_filter: Option<String>,
    },
    Shape { name: String },
    Index { title: String },
    Topic {
        slug: String,
        with_links: bool,
        with_refs: bool,
    },
    Manuscripts { reference: String },
    /// Category path used to restrict searches to one book
    SearchPathFilter { book_name: String },
}

impl LibraryRequest {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            LibraryRequest::Text { .. } => "text",
            LibraryRequest::EnglishVersions { .. } => "english_versions",
            LibraryRequest::Calendars => "calendars",
            LibraryRequest::Links { .. } => "links",
            LibraryRequest::Name { .. } => "name",
            LibraryRequest::Shape { .. } => "shape",
            LibraryRequest::Index { .. } => "index",
            LibraryRequest::Topic { .. } => "topic",
            LibraryRequest::Manuscripts { .. } => "manuscripts",
            LibraryRequest::SearchPathFilter { .. } => "search_path_filter",
        }
    }
}

/// A full-text search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    /// Category paths; empty searches the whole library
    pub filters: Vec<String>,
    pub size: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, size: u32) -> Self {
        Self {
            query: query.into(),
            filters: Vec::new(),
            size,
        }
    }

    pub fn with_filters(mut self, filters: Vec<String>) -> Self {
        self.filters = filters;
        self
    }
}

/// Gateway to the text-library service
///
/// Implementations return parsed JSON or a typed failure. They never retry.
#[async_trait]
pub trait LibraryGateway: Send + Sync {
    /// Perform a read request
    async fn fetch(&self, request: &LibraryRequest) -> Result<Value, GatewayError>;

    /// Run a full-text search
    async fn search(&self, query: &SearchQuery) -> Result<Value, GatewayError>;
}
