//! Application layer for sefaria-mcp
//!
//! This crate contains the tool registry, the dispatcher use case, port
//! definitions, and application configuration. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod tools;
pub mod use_cases;

// Re-export commonly used types
pub use config::SearchSettings;
pub use ports::{
    calendar::CalendarPort,
    library_gateway::{GatewayError, LibraryGateway, LibraryRequest, SearchQuery, VersionLanguage},
    tool_schema::ToolSchemaPort,
};
pub use tools::{ToolHandler, ToolRegistry};
pub use use_cases::invoke_tool::InvokeToolUseCase;
