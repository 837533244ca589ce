//! Invoke Tool use case (the dispatcher).
//!
//! Single entry point for every tool call:
//! 1. look up the tool in the [`ToolRegistry`]
//! 2. resolve arguments against its schema
//! 3. run the handler
//! 4. render the outcome as a [`ToolResult`]
//!
//! Every outcome, including a panicking handler, ends as a well-formed
//! success text or a single-line `Error: ...` text. Nothing escapes
//! [`InvokeToolUseCase::invoke`].

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use sefaria_domain::tool::{
    entities::{ArgumentBag, ToolCall},
    traits::{ArgumentResolver, DefaultArgumentResolver},
    value_objects::{ToolError, ToolResult},
};
use tracing::{debug, error, warn};

use crate::tools::registry::ToolRegistry;

/// Use case for dispatching tool calls.
///
/// Holds no mutable state; concurrent calls share only the read-only
/// registry.
#[derive(Clone)]
pub struct InvokeToolUseCase {
    registry: Arc<ToolRegistry>,
    resolver: Arc<dyn ArgumentResolver>,
}

impl InvokeToolUseCase {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            resolver: Arc::new(DefaultArgumentResolver),
        }
    }

    /// Use a custom argument resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn ArgumentResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Invoke `name` with raw `arguments`.
    pub async fn invoke(&self, name: &str, arguments: ArgumentBag) -> ToolResult {
        self.execute(&ToolCall::new(name).with_arguments(arguments)).await
    }

    /// Execute a tool call.
    pub async fn execute(&self, call: &ToolCall) -> ToolResult {
        let name = call.tool_name.as_str();
        debug!(tool = name, args = ?call.argument_names(), "Invoking tool");

        let outcome = AssertUnwindSafe(self.run(call)).catch_unwind().await;

        match outcome {
            Ok(Ok(text)) => {
                debug!(tool = name, bytes = text.len(), "Tool succeeded");
                ToolResult::success(name, text)
            }
            Ok(Err(e)) => {
                warn!(tool = name, kind = %e.kind, error = %e.message, "Tool failed");
                ToolResult::failure(name, &e)
            }
            Err(_) => {
                error!(tool = name, "Tool handler panicked");
                ToolResult::failure(name, &ToolError::internal(name))
            }
        }
    }

    async fn run(&self, call: &ToolCall) -> Result<String, ToolError> {
        let name = call.tool_name.as_str();
        let (definition, handler) = self
            .registry
            .lookup(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;

        let undeclared: Vec<&str> = call
            .arguments
            .keys()
            .map(String::as_str)
            .filter(|key| definition.parameter(key).is_none())
            .collect();
        if !undeclared.is_empty() {
            debug!(tool = name, ignored = ?undeclared, "Ignoring undeclared arguments");
        }

        let args = self.resolver.resolve(&call.arguments, definition)?;
        let result = handler.handle(&args).await?;
        result.render()
    }
}
