//! Library response decoding and normalization
//!
//! Upstream payloads are loosely typed: optional hit data, total counts in two
//! encodings, filters that are either a string or a list, version lists with
//! missing fields. Each response family gets an explicit decoder here with
//! exhaustive field defaults, so a missing or renamed field fails one
//! well-localized decode step instead of leaking an undefined value.
//!
//! | Family | Module | Output |
//! |--------|--------|--------|
//! | Search hits | [`search`] | [`NormalizedSearchResult`] list |
//! | Dictionary hits | [`dictionary`] | [`DictionaryEntry`] list |
//! | Text versions | [`texts`] | projected text payload / [`EnglishTranslations`] |
//! | Everything else | [`result`] | [`NormalizedResult::Passthrough`] |

pub mod dictionary;
pub mod filters;
pub mod result;
pub mod search;
pub mod snippet;
pub mod texts;

pub use dictionary::{DictionaryEntry, LEXICONS, lexicon_filters, lexicon_name, normalize_dictionary};
pub use filters::coerce_filters;
pub use result::NormalizedResult;
pub use search::{
    HitSource, NormalizedSearchResult, SearchHit, SearchHits, SearchResponse, SearchTotal,
    decode_path_filter, decode_search, normalize_search,
};
pub use snippet::SnippetExtractor;
pub use texts::{EnglishTranslations, TextVersion, TranslationVersion, VersionSummary, english_translations, project_text};

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be explicitly `null` upstream, using the
/// type's default in that case.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
