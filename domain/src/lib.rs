//! Domain layer for sefaria-mcp
//!
//! This crate contains the tool contracts, argument resolution, and the
//! decoders that turn loosely-typed library responses into stable output
//! shapes. It performs no I/O and has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! Every capability is a named [`ToolDefinition`] with an ordered parameter
//! schema. Raw caller arguments ([`ArgumentBag`]) are checked by an
//! [`ArgumentResolver`] into [`ResolvedArguments`] before any handler runs.
//!
//! ## Normalization
//!
//! - **Search**: hits become [`NormalizedSearchResult`]s with one snippet each,
//!   chosen by the [`SnippetExtractor`]
//! - **Texts**: version lists are projected to a fixed field set
//! - **Passthrough**: everything else is returned as upstream sent it
//!
//! ## Failures
//!
//! A failed call is a [`ToolError`] with a [`FailureKind`]; it becomes a
//! single-line `Error: ...` [`ToolResult`] at the dispatcher.

pub mod calendar;
pub mod library;
pub mod tool;
pub mod util;

pub use calendar::HebrewDate;
pub use library::{
    DictionaryEntry, EnglishTranslations, NormalizedResult, NormalizedSearchResult, SearchHit,
    SearchResponse, SnippetExtractor, coerce_filters,
};
pub use tool::{
    ArgumentBag, ArgumentResolver, DefaultArgumentResolver, FailureKind, ParamType,
    ResolvedArguments, ToolCall, ToolDefinition, ToolError, ToolParameter, ToolResult, ToolSpec,
};
