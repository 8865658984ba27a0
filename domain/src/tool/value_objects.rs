//! Tool domain value objects: arguments in, structured result out.
//!
//! Arguments are deliberately schemaless: the client passes a JSON object
//! through to the server without validating it against the tool's schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named arguments for a tool call (string keys, any JSON value).
pub type ToolArguments = Map<String, Value>;

/// Structured result of a tool call.
///
/// Holds the JSON document the server serialised into the first text
/// content block of its response. The shape depends on the tool; callers
/// pick out the sub-fields they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolResult(Value);

impl ToolResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a top-level field (returns `None` for non-object results).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow a top-level field as a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Number of elements when the result is an array.
    pub fn array_len(&self) -> Option<usize> {
        self.0.as_array().map(Vec::len)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ToolResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_access() {
        let result = ToolResult::new(json!({"reportPlan": "1. Background", "n": 3}));
        assert_eq!(result.get_str("reportPlan"), Some("1. Background"));
        assert_eq!(result.get("n"), Some(&json!(3)));
        assert!(result.get("missing").is_none());
        assert!(result.array_len().is_none());
    }

    #[test]
    fn test_array_result() {
        let result = ToolResult::new(json!([{"query": "a"}, {"query": "b"}]));
        assert_eq!(result.array_len(), Some(2));
        assert!(result.get("query").is_none());
    }

    #[test]
    fn test_serializes_transparently() {
        let result = ToolResult::new(json!({"a": 1}));
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({"a": 1}));
    }
}
