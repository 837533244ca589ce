//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing the JSON Schema
//! used by MCP `tools/list` and by `sefaria-mcp tools`.

use sefaria_application::ports::tool_schema::ToolSchemaPort;
use sefaria_domain::tool::entities::{ParamType, ToolDefinition, ToolSpec};
use serde_json::{Map, Value, json};

/// Default implementation producing JSON Schema.
///
/// Handles param_type → JSON Schema mapping:
/// - `String` → `"string"`
/// - `Integer` → `"integer"`
/// - `Boolean` → `"boolean"`
/// - `StringOrArray` → `["string", "array"]` with string `items`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn input_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = Map::new();
            match param.param_type {
                ParamType::String => {
                    prop.insert("type".to_string(), json!("string"));
                }
                ParamType::Integer => {
                    prop.insert("type".to_string(), json!("integer"));
                }
                ParamType::Boolean => {
                    prop.insert("type".to_string(), json!("boolean"));
                }
                ParamType::StringOrArray => {
                    prop.insert("type".to_string(), json!(["string", "array"]));
                    prop.insert("items".to_string(), json!({"type": "string"}));
                }
            }
            prop.insert("description".to_string(), json!(param.description));
            if !param.allowed_values.is_empty() {
                prop.insert("enum".to_string(), json!(param.allowed_values));
            }
            if let Some(default) = &param.default {
                prop.insert("default".to_string(), default.clone());
            }
            properties.insert(param.name.clone(), Value::Object(prop));

            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        json!({
            "name": tool.name,
            "description": tool.description,
            "inputSchema": self.input_schema(tool),
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<Value> {
        spec.all().map(|t| self.tool_to_schema(t)).collect()
    }
}
