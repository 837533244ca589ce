//! Tool domain module
//!
//! Defines the contract surface every library tool is exposed through: a
//! [`ToolDefinition`] (name, ordered parameter schema, defaults, enums), the
//! raw [`ArgumentBag`] a caller supplies, the [`ResolvedArguments`] produced
//! by an [`ArgumentResolver`], and the [`ToolResult`] envelope every call
//! ends in.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌───────────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ArgumentBag      │───▶│ ResolvedArguments │───▶│ ToolResult   │
//! │ (catalog)    │    │ (raw, per call)  │    │ (schema-checked)  │    │ (text)       │
//! └──────────────┘    └──────────────────┘    └───────────────────┘    └──────────────┘
//! ```
//!
//! # Failure taxonomy
//!
//! Every failure is a [`ToolError`] carrying a [`FailureKind`]. Failures are
//! values, not control flow: they travel back to the dispatcher, which is the
//! single place that turns them into `Error: ...` text.
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions and validation, no I/O
//! - **Application**: registry of handlers and the dispatcher
//! - **Infrastructure**: HTTP gateway and JSON Schema export

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ArgumentBag, ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{ArgumentResolver, DefaultArgumentResolver};
pub use value_objects::{FailureKind, ResolvedArguments, ToolError, ToolResult};
