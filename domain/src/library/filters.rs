//! Search filter coercion

use serde_json::Value;

/// Normalize a filter argument into an ordered list of category paths.
///
/// Accepts an absent value, a single string, or an array of strings. Order is
/// preserved; nothing is deduplicated, re-cased or checked for path syntax.
/// An empty string and an empty array both yield an empty list. Non-string
/// array items are skipped; the resolver has already rejected them for
/// declared filter parameters.
pub fn coerce_filters(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_absent() {
        assert!(coerce_filters(None).is_empty());
        assert!(coerce_filters(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn test_coerce_single_string() {
        assert_eq!(coerce_filters(Some(&json!("x"))), vec!["x"]);
        assert!(coerce_filters(Some(&json!(""))).is_empty());
    }

    #[test]
    fn test_coerce_array_preserves_order() {
        assert_eq!(coerce_filters(Some(&json!(["x", "y"]))), vec!["x", "y"]);
        assert_eq!(
            coerce_filters(Some(&json!(["Talmud/Bavli", "Tanakh", "Talmud/Bavli"]))),
            vec!["Talmud/Bavli", "Tanakh", "Talmud/Bavli"]
        );
        assert!(coerce_filters(Some(&json!([]))).is_empty());
    }

    #[test]
    fn test_coerce_other_types() {
        assert!(coerce_filters(Some(&json!(3))).is_empty());
        assert!(coerce_filters(Some(&json!({"a": 1}))).is_empty());
    }
}
