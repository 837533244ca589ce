//! Console output for the tool catalog and one-shot calls

use colored::Colorize;
use sefaria_domain::tool::entities::{ToolDefinition, ToolSpec};
use sefaria_domain::tool::value_objects::ToolResult;
use serde_json::Value;

/// Formats catalog listings and call results for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Catalog as pretty-printed JSON Schema
    pub fn format_catalog_json(schemas: &[Value]) -> String {
        serde_json::to_string_pretty(schemas).unwrap_or_else(|_| "[]".to_string())
    }

    /// Catalog as a human-readable listing
    pub fn format_catalog(spec: &ToolSpec) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} tools", spec.len())));
        output.push('\n');

        for tool in spec.all() {
            output.push_str(&Self::format_tool(tool));
        }

        output
    }

    fn format_tool(tool: &ToolDefinition) -> String {
        let mut output = format!("\n{}\n  {}\n", tool.name.yellow().bold(), tool.description);

        for param in &tool.parameters {
            let marker = if param.required {
                "required".red().to_string()
            } else {
                "optional".dimmed().to_string()
            };
            output.push_str(&format!(
                "    {} ({}, {})",
                param.name.cyan(),
                param.param_type.as_str(),
                marker
            ));
            if !param.allowed_values.is_empty() {
                output.push_str(&format!(" one of [{}]", param.allowed_values.join(", ")));
            }
            if let Some(default) = &param.default {
                output.push_str(&format!(" default {}", default));
            }
            output.push('\n');
        }

        output
    }

    /// Text of a call result. Failures are already a single `Error: ` line.
    pub fn format_result(result: &ToolResult) -> String {
        if result.is_error() {
            result.text().red().to_string()
        } else {
            result.text().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
