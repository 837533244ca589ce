//! Text and version payload projection
//!
//! The texts endpoint returns a large object per reference. Callers only need
//! a few fields of each version, so `versions` and `available_versions` are
//! projected while every other key passes through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use crate::tool::value_objects::ToolError;

/// Entry of `versions`, projected to the fields callers rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVersion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub language_family_name: String,
    /// Either a string or a (possibly nested) array of segments
    #[serde(default = "empty_text", deserialize_with = "text_or_empty")]
    pub text: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version_title: String,
}

/// Entry of `available_versions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language_family_name: String,
}

/// One English translation of a reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationVersion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version_title: String,
    #[serde(default = "empty_text", deserialize_with = "text_or_empty")]
    pub text: Value,
}

/// All English translations of a reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnglishTranslations {
    pub reference: String,
    pub english_translations: Vec<TranslationVersion>,
}

fn empty_text() -> Value {
    Value::String(String::new())
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.unwrap_or_else(empty_text))
}

fn project_list<T>(data: &mut Map<String, Value>, key: &str) -> Result<(), ToolError>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let Some(raw) = data.get_mut(key).filter(|v| !v.is_null()) else {
        return Ok(());
    };
    let items: Vec<T> = serde_json::from_value(raw.take())
        .map_err(|e| ToolError::upstream_malformed(format!("Unexpected '{}' in text response: {}", key, e)))?;
    *raw = serde_json::to_value(items)
        .map_err(|e| ToolError::upstream_malformed(format!("Failed to encode '{}': {}", key, e)))?;
    Ok(())
}

fn expect_object(payload: Value) -> Result<Map<String, Value>, ToolError> {
    match payload {
        Value::Object(map) => Ok(map),
        other => Err(ToolError::upstream_malformed(format!(
            "Expected an object from the texts endpoint, got {}",
            type_label(&other)
        ))),
    }
}

fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Project `versions` and `available_versions` of a text payload.
///
/// Upstream order and key positions are kept. Missing version fields become
/// empty strings.
pub fn project_text(payload: Value) -> Result<Map<String, Value>, ToolError> {
    let mut data = expect_object(payload)?;
    project_list::<TextVersion>(&mut data, "versions")?;
    project_list::<VersionSummary>(&mut data, "available_versions")?;
    Ok(data)
}

/// Collect version titles and text from an English-versions payload.
pub fn english_translations(reference: &str, payload: Value) -> Result<EnglishTranslations, ToolError> {
    let mut data = expect_object(payload)?;
    let english_translations = match data.get_mut("versions").map(Value::take) {
        None | Some(Value::Null) => Vec::new(),
        Some(raw) => serde_json::from_value(raw).map_err(|e| {
            ToolError::upstream_malformed(format!("Unexpected 'versions' in text response: {}", e))
        })?,
    };
    Ok(EnglishTranslations {
        reference: reference.to_string(),
        english_translations,
    })
}
