//! Search configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};

/// Raw search configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Hits requested by `search_dictionaries`
    pub dictionary_size: u32,
    /// Maximum word distance for phrase matches
    pub slop: u32,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            dictionary_size: 8,
            slop: 10,
        }
    }
}
