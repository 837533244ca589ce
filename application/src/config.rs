//! Application-level configuration.
//!
//! Settings that change how tool handlers build their requests.

/// Search behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Number of hits requested by `search_dictionaries`
    pub dictionary_size: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { dictionary_size: 8 }
    }
}

impl SearchSettings {
    pub fn with_dictionary_size(mut self, size: u32) -> Self {
        self.dictionary_size = size;
        self
    }
}
