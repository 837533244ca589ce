//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Raw arguments as delivered by the transport, keyed by argument name.
pub type ArgumentBag = Map<String, Value>;

/// Declared type of a tool parameter.
///
/// Values are checked against this type during argument resolution; no
/// coercion between scalar types is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    String,
    Integer,
    Boolean,
    /// A single string or an array of strings (e.g. search filters)
    StringOrArray,
}

impl ParamType {
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
            ParamType::StringOrArray => "string or array of strings",
        }
    }

    /// Whether a raw JSON value has this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Integer => value.is_i64() || value.is_u64(),
            ParamType::Boolean => value.is_boolean(),
            ParamType::StringOrArray => match value {
                Value::String(_) => true,
                Value::Array(items) => items.iter().all(Value::is_string),
                _ => false,
            },
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool exposed through the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_text")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Declared type
    pub param_type: ParamType,
    /// Value substituted when an optional parameter is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Enumerated values (empty = unrestricted)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: ParamType::String,
            default: None,
            allowed_values: Vec::new(),
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered catalog of tool definitions.
///
/// Built once at startup; lookups are by exact name.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition. A later registration with the same name
    /// replaces the earlier one in place.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        match self.index.get(&tool.name) {
            Some(&i) => self.tools[i] = tool,
            None => {
                self.index.insert(tool.name.clone(), self.tools.len());
                self.tools.push(tool);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All definitions in registration order
    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with raw arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: ArgumentBag,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: ArgumentBag::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_arguments(mut self, arguments: ArgumentBag) -> Self {
        self.arguments = arguments;
        self
    }

    /// Names of the supplied arguments, for logging without values
    pub fn argument_names(&self) -> Vec<&str> {
        self.arguments.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("get_links", "Find connections")
            .with_parameter(ToolParameter::new("reference", "Text reference", true))
            .with_parameter(
                ToolParameter::new("with_text", "Include text", false)
                    .with_default("0")
                    .with_allowed_values(["0", "1"]),
            );

        assert_eq!(tool.name, "get_links");
        assert_eq!(tool.parameters.len(), 2);
        assert_eq!(tool.required_parameters().count(), 1);
        let with_text = tool.parameter("with_text").unwrap();
        assert_eq!(with_text.default, Some(json!("0")));
        assert_eq!(with_text.allowed_values, vec!["0", "1"]);
        assert!(tool.parameter("missing").is_none());
    }

    #[test]
    fn test_param_type_accepts() {
        assert!(ParamType::String.accepts(&json!("x")));
        assert!(!ParamType::String.accepts(&json!(1)));
        assert!(ParamType::Integer.accepts(&json!(5)));
        assert!(!ParamType::Integer.accepts(&json!(5.5)));
        assert!(!ParamType::Integer.accepts(&json!("5")));
        assert!(ParamType::Boolean.accepts(&json!(false)));
        assert!(!ParamType::Boolean.accepts(&json!("false")));
        assert!(ParamType::StringOrArray.accepts(&json!("Tanakh")));
        assert!(ParamType::StringOrArray.accepts(&json!(["Tanakh", "Mishnah"])));
        assert!(ParamType::StringOrArray.accepts(&json!([])));
        assert!(!ParamType::StringOrArray.accepts(&json!(["Tanakh", 3])));
    }

    #[test]
    fn test_tool_spec_preserves_order() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("get_text", "Text"))
            .register(ToolDefinition::new("get_links", "Links"))
            .register(ToolDefinition::new("get_shape", "Shape"));

        let names: Vec<&str> = spec.names().collect();
        assert_eq!(names, vec!["get_text", "get_links", "get_shape"]);
        assert!(spec.contains("get_links"));
        assert!(spec.get("unknown").is_none());
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn test_tool_spec_reregister_replaces_in_place() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("get_text", "old"))
            .register(ToolDefinition::new("get_links", "Links"))
            .register(ToolDefinition::new("get_text", "new"));

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("get_text").unwrap().description, "new");
        assert_eq!(spec.names().next(), Some("get_text"));
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("search_texts")
            .with_arg("query", "moses")
            .with_arg("size", 5);

        assert_eq!(call.tool_name, "search_texts");
        assert_eq!(call.arguments.get("query"), Some(&json!("moses")));
        assert_eq!(call.argument_names(), vec!["query", "size"]);
    }
}
