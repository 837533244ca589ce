//! Upstream service configuration from TOML (`[upstream]` section)

use serde::{Deserialize, Serialize};

/// Default library service root
pub const DEFAULT_BASE_URL: &str = "https://www.sefaria.org";

/// Raw upstream configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUpstreamConfig {
    /// Root URL of the library service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FileUpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("sefaria-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
