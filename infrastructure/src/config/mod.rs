//! Configuration file loading for sefaria-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `SEFARIA_MCP_*` (nested keys split on `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./sefaria-mcp.toml` or `./.sefaria-mcp.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sefaria-mcp/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_BASE_URL, FileConfig, FileLoggingConfig, FileSearchConfig,
    FileUpstreamConfig, Severity,
};
pub use loader::{ConfigError, ConfigLoader};
