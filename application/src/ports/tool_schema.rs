//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain catalog) from "how to describe them
//! on the wire" (infrastructure). Transports use the resulting JSON Schema to
//! advertise the catalog.

use sefaria_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition's parameters to an input schema object.
    fn input_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert a single tool definition to `{name, description, inputSchema}`.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools, in catalog order.
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}
