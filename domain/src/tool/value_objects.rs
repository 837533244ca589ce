//! Tool domain value objects: resolved arguments, failures and the result envelope
//!
//! These types form the **output side** of the dispatch pipeline. Every
//! invocation ends as a [`ToolResult`]: either the rendered payload of a
//! successful call, or a single-line `Error: ...` text built from a
//! [`ToolError`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::library::filters::coerce_filters;
use crate::util::single_line;

/// Category of a failed tool call.
///
/// | Kind | Origin |
/// |------|--------|
/// | `MissingArgument` | Absent required argument, wrong type, or value outside its enum |
/// | `UnknownTool` | Tool name not in the registry |
/// | `UpstreamUnavailable` | Network or HTTP-status failure reaching the library service |
/// | `UpstreamMalformed` | Body could not be parsed or had an unexpected shape |
/// | `NotFound` | The service answered, but the requested entity does not exist |
/// | `Internal` | A handler panicked; caught at the dispatcher |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    MissingArgument,
    UnknownTool,
    UpstreamUnavailable,
    UpstreamMalformed,
    NotFound,
    Internal,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FailureKind::MissingArgument => "MISSING_ARGUMENT",
            FailureKind::UnknownTool => "UNKNOWN_TOOL",
            FailureKind::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            FailureKind::UpstreamMalformed => "UPSTREAM_MALFORMED",
            FailureKind::NotFound => "NOT_FOUND",
            FailureKind::Internal => "INTERNAL",
        }
    }

    /// Whether the caller can fix this failure by changing the request.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, FailureKind::MissingArgument | FailureKind::UnknownTool)
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure of a tool call, created where it is detected and carried
/// unchanged to the dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ToolError {
    pub kind: FailureKind,
    pub message: String,
}

impl ToolError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::new(FailureKind::MissingArgument, message)
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(FailureKind::UnknownTool, format!("Unknown tool: {}", name))
    }

    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(FailureKind::UpstreamUnavailable, message)
    }

    pub fn upstream_malformed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::UpstreamMalformed, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::NotFound, message)
    }

    pub fn internal(tool_name: &str) -> Self {
        Self::new(
            FailureKind::Internal,
            format!("internal error while running '{}'", tool_name),
        )
    }
}

/// Arguments that satisfied a tool's full schema.
///
/// Holds exactly the keys the schema declares. Optional parameters without a
/// default resolve to `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedArguments {
    values: Map<String, Value>,
}

impl ResolvedArguments {
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Get a string the schema marks as required.
    pub fn require_str(&self, key: &str) -> Result<&str, ToolError> {
        self.get_str(key)
            .ok_or_else(|| ToolError::missing_argument(format!("Missing required argument: {}", key)))
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Get a string-or-array argument as an ordered list of strings.
    pub fn get_filters(&self, key: &str) -> Vec<String> {
        coerce_filters(self.get(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Uniform textual outcome of one tool invocation.
///
/// Failures always render as a single line starting with `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was invoked
    pub tool_name: String,
    /// Rendered payload or error line
    pub text: String,
    /// Failure kind, when the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            text: text.into(),
            error_kind: None,
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: &ToolError) -> Self {
        let message = single_line(&error.message);
        Self {
            tool_name: tool_name.into(),
            text: format!("Error: {}", message),
            error_kind: Some(error.kind),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_kind.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error_kind.is_some()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
