//! Tool Registry
//!
//! The [`ToolRegistry`] pairs every [`ToolDefinition`] with the handler that
//! runs it. It is built once at startup and is read-only afterwards; the
//! dispatcher receives it explicitly, so tests can build as many independent
//! registries as they need.
//!
//! # Usage
//!
//! ```ignore
//! let registry = ToolRegistry::library(gateway, calendar, SearchSettings::default());
//! assert!(registry.has_tool("get_text"));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use sefaria_domain::tool::entities::{ToolDefinition, ToolSpec};

use super::catalog;
use super::handlers::{
    DictionaryHandler, EnglishTranslationsHandler, PassthroughHandler, PathFilterHandler,
    RequestBuilder, SearchInBookHandler, SearchTextsHandler, SituationalInfoHandler, TextHandler, ToolHandler,
    index_request, links_request, manuscripts_request, name_request, shape_request, topic_request,
};
use crate::config::SearchSettings;
use crate::ports::calendar::CalendarPort;
use crate::ports::library_gateway::LibraryGateway;

/// Catalog of tools and their handlers
#[derive(Default)]
pub struct ToolRegistry {
    spec: ToolSpec,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A later registration with the same name replaces the
    /// earlier one.
    pub fn register<H: ToolHandler + 'static>(self, definition: ToolDefinition, handler: H) -> Self {
        self.register_arc(definition, Arc::new(handler))
    }

    /// Register a tool (Arc version)
    pub fn register_arc(mut self, definition: ToolDefinition, handler: Arc<dyn ToolHandler>) -> Self {
        tracing::trace!(tool = %definition.name, "Registered tool");
        self.handlers.insert(definition.name.clone(), handler);
        self.spec = self.spec.register(definition);
        self
    }

    /// The full library catalog, backed by `gateway` and `calendar`.
    pub fn library(
        gateway: Arc<dyn LibraryGateway>,
        calendar: Arc<dyn CalendarPort>,
        settings: SearchSettings,
    ) -> Self {
        let passthrough = |build: RequestBuilder| PassthroughHandler::new(gateway.clone(), build);

        Self::new()
            .register(catalog::get_text(), TextHandler::new(gateway.clone()))
            .register(
                catalog::get_english_translations(),
                EnglishTranslationsHandler::new(gateway.clone()),
            )
            .register(
                catalog::get_situational_info(),
                SituationalInfoHandler::new(gateway.clone(), calendar),
            )
            .register(catalog::get_links(), passthrough(links_request))
            .register(catalog::search_texts(), SearchTextsHandler::new(gateway.clone()))
            .register(catalog::search_in_book(), SearchInBookHandler::new(gateway.clone()))
            .register(
                catalog::search_dictionaries(),
                DictionaryHandler::new(gateway.clone(), settings.dictionary_size),
            )
            .register(catalog::get_name(), passthrough(name_request))
            .register(catalog::get_shape(), passthrough(shape_request))
            .register(
                catalog::get_search_path_filter(),
                PathFilterHandler::new(gateway.clone()),
            )
            .register(catalog::get_topics(), passthrough(topic_request))
            .register(catalog::get_manuscripts(), passthrough(manuscripts_request))
            .register(catalog::get_index(), passthrough(index_request))
    }

    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.spec.contains(name)
    }

    /// Definition and handler for `name`
    pub fn lookup(&self, name: &str) -> Option<(&ToolDefinition, &Arc<dyn ToolHandler>)> {
        let definition = self.spec.get(name)?;
        let handler = self.handlers.get(name)?;
        Some((definition, handler))
    }

    /// Names of all tools, in catalog order
    pub fn available_tools(&self) -> Vec<&str> {
        self.spec.names().collect()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.available_tools())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::library_gateway::{GatewayError, LibraryRequest, SearchQuery};
    use async_trait::async_trait;
    use sefaria_domain::library::NormalizedResult;
    use sefaria_domain::tool::value_objects::{ResolvedArguments, ToolError};
    use serde_json::Value;

    struct NullGateway;

    #[async_trait]
    impl LibraryGateway for NullGateway {
        async fn fetch(&self, _request: &LibraryRequest) -> Result<Value, GatewayError> {
            Ok(Value::Null)
        }

        async fn search(&self, _query: &SearchQuery) -> Result<Value, GatewayError> {
            Ok(Value::Null)
        }
    }

    struct FixedCalendar;

    impl CalendarPort for FixedCalendar {
        fn current_hebrew_date(&self) -> String {
            "Sunday 7 Marcheshvan 5787".to_string()
        }
    }

    struct Constant(&'static str);

    #[async_trait]
    impl ToolHandler for Constant {
        async fn handle(&self, _args: &ResolvedArguments) -> Result<NormalizedResult, ToolError> {
            Ok(NormalizedResult::PathFilter(self.0.to_string()))
        }
    }

    #[test]
    fn test_library_catalog_is_complete() {
        let registry = ToolRegistry::library(
            Arc::new(NullGateway),
            Arc::new(FixedCalendar),
            SearchSettings::default(),
        );

        assert_eq!(
            registry.available_tools(),
            vec![
                "get_text",
                "get_english_translations",
                "get_situational_info",
                "get_links",
                "search_texts",
                "search_in_book",
                "search_dictionaries",
                "get_name",
                "get_shape",
                "get_search_path_filter",
                "get_topics",
                "get_manuscripts",
                "get_index",
            ]
        );
        for name in registry.available_tools() {
            assert!(registry.lookup(name).is_some(), "{} has no handler", name);
        }
    }

    #[test]
    fn test_register_replaces_existing() {
        let registry = ToolRegistry::new()
            .register(ToolDefinition::new("echo", "first"), Constant("a"))
            .register(ToolDefinition::new("echo", "second"), Constant("b"));

        assert_eq!(registry.available_tools(), vec!["echo"]);
        let (definition, _) = registry.lookup("echo").unwrap();
        assert_eq!(definition.description, "second");
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = ToolRegistry::new();
        assert!(registry.lookup("unknown_tool").is_none());
        assert!(!registry.has_tool("unknown_tool"));
    }
}
