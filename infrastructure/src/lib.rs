//! Infrastructure layer for sefaria-mcp
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP library gateway, the Hebrew
//! calendar clock, JSON Schema export, and configuration file loading.

pub mod config;
pub mod sefaria;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigError, ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use sefaria::{HebrewCalendar, HttpLibraryGateway};
pub use tools::JsonSchemaToolConverter;
