//! Presentation layer for sefaria-mcp
//!
//! This crate contains the CLI definition, the MCP stdio server and
//! console output formatting.

pub mod cli;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, parse_arguments};
pub use output::console::ConsoleFormatter;
pub use server::SefariaServer;
