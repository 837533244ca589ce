//! Tool domain traits
//!
//! Contains the pure argument resolution logic. Resolution checks a raw
//! [`ArgumentBag`] against a [`ToolDefinition`] and either produces
//! [`ResolvedArguments`] satisfying the whole schema or fails without
//! returning anything partial.

use serde_json::{Map, Value};

use super::entities::{ArgumentBag, ParamType, ToolDefinition, ToolParameter};
use super::value_objects::{ResolvedArguments, ToolError};

/// Resolver for raw tool arguments
///
/// This is a pure domain trait; it performs no I/O.
pub trait ArgumentResolver: Send + Sync {
    /// Validate `arguments` against `definition` and apply defaults
    fn resolve(
        &self,
        arguments: &ArgumentBag,
        definition: &ToolDefinition,
    ) -> Result<ResolvedArguments, ToolError>;
}

/// Default implementation of ArgumentResolver
///
/// - `null` counts as absent
/// - required strings that are empty or whitespace-only count as absent
/// - arguments the schema does not declare are dropped
#[derive(Debug, Clone, Default)]
pub struct DefaultArgumentResolver;

impl DefaultArgumentResolver {
    fn resolve_one(
        param: &ToolParameter,
        raw: Option<&Value>,
        tool: &str,
    ) -> Result<Value, ToolError> {
        let Some(value) = raw.filter(|v| !v.is_null()) else {
            if param.required {
                return Err(missing(param, tool));
            }
            return Ok(param.default.clone().unwrap_or(Value::Null));
        };

        if !param.param_type.accepts(value) {
            return Err(ToolError::missing_argument(format!(
                "Invalid argument '{}' for tool '{}': expected {}, got {}",
                param.name,
                tool,
                param.param_type,
                json_type_name(value)
            )));
        }

        if param.required
            && param.param_type == ParamType::String
            && value.as_str().is_some_and(|s| s.trim().is_empty())
        {
            return Err(missing(param, tool));
        }

        if let Some(s) = value.as_str() {
            if !param.allowed_values.is_empty()
                && !param.allowed_values.iter().any(|allowed| allowed == s)
            {
                return Err(ToolError::missing_argument(format!(
                    "Invalid argument '{}' for tool '{}': expected one of [{}], got '{}'",
                    param.name,
                    tool,
                    param.allowed_values.join(", "),
                    s
                )));
            }
        }

        Ok(value.clone())
    }
}

impl ArgumentResolver for DefaultArgumentResolver {
    fn resolve(
        &self,
        arguments: &ArgumentBag,
        definition: &ToolDefinition,
    ) -> Result<ResolvedArguments, ToolError> {
        let mut resolved = Map::new();
        for param in &definition.parameters {
            let value = Self::resolve_one(param, arguments.get(&param.name), &definition.name)?;
            resolved.insert(param.name.clone(), value);
        }
        Ok(ResolvedArguments::from_map(resolved))
    }
}

fn missing(param: &ToolParameter, tool: &str) -> ToolError {
    ToolError::missing_argument(format!(
        "Missing required argument '{}' for tool '{}'",
        param.name, tool
    ))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
