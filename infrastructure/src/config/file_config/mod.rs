//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application settings by
//! the binary.

mod logging;
mod search;
mod upstream;

pub use logging::FileLoggingConfig;
pub use search::FileSearchConfig;
pub use upstream::{DEFAULT_BASE_URL, FileUpstreamConfig};

use sefaria_application::SearchSettings;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Library service connection
    pub upstream: FileUpstreamConfig,
    /// Search request settings
    pub search: FileSearchConfig,
    /// Log sinks
    pub logging: FileLoggingConfig,
}

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found while validating configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key, e.g. `upstream.base_url`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.upstream.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::error("upstream.base_url", "upstream.base_url is empty"));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                "upstream.base_url",
                format!("upstream.base_url must be an http(s) URL, got '{}'", base_url),
            ));
        }

        if self.upstream.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "upstream.timeout_secs",
                "upstream.timeout_secs must be greater than 0",
            ));
        }

        if self.search.dictionary_size == 0 {
            issues.push(ConfigIssue::warning(
                "search.dictionary_size",
                "search.dictionary_size is 0; dictionary searches will return nothing",
            ));
        }

        issues
    }

    /// Handler settings derived from `[search]`
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings::default().with_dictionary_size(self.search.dictionary_size)
    }

    /// Whether any issue is an error
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[upstream]
base_url = "http://localhost:8000"
timeout_secs = 5
user_agent = "test-agent"

[search]
dictionary_size = 12
slop = 4

[logging]
file = "/tmp/sefaria-mcp.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.upstream.base_url, "http://localhost:8000");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.upstream.user_agent, "test-agent");
        assert_eq!(config.search.dictionary_size, 12);
        assert_eq!(config.search.slop, 4);
        assert_eq!(
            config.logging.file.as_deref(),
            Some(std::path::Path::new("/tmp/sefaria-mcp.log"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[search]
slop = 2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.slop, 2);
        // Defaults should apply
        assert_eq!(config.search.dictionary_size, 8);
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_search_settings() {
        let mut config = FileConfig::default();
        config.search.dictionary_size = 3;
        assert_eq!(config.search_settings().dictionary_size, 3);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let mut config = FileConfig::default();
        config.upstream.base_url = "ftp://example.org".to_string();
        config.upstream.timeout_secs = 0;
        config.search.dictionary_size = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(FileConfig::has_errors(&issues));
        assert_eq!(issues[0].field, "upstream.base_url");
        assert_eq!(issues[2].severity, Severity::Warning);
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = FileConfig::default();
        config.upstream.base_url = "  ".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("empty"));
    }
}
