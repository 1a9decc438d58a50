//! Tool handler trait and result helpers.
//!
//! A handler receives arguments that already passed schema validation (with
//! defaults filled in) and always produces a [`CallToolResult`]. Failures are
//! reported as text content, never as errors.

use rmcp::model::{CallToolResult, Content, JsonObject, RawContent};
use serde::de::DeserializeOwned;

use super::schema::InputSchema;

/// Static description of a tool: its name, what it does and its arguments.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: InputSchema,
}

/// Trait implemented by every tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with validated arguments.
    async fn call(&self, arguments: JsonObject) -> CallToolResult;
}

/// Decode validated arguments into a typed parameter struct.
pub fn decode_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, serde_json::Error> {
    serde_json::from_value(serde_json::Value::Object(arguments))
}

/// Create a result holding a single text item.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// First text item of a result, if any.
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|content| match &content.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_result_roundtrip() {
        let result = text_result("hello");
        assert_eq!(first_text(&result), Some("hello"));
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_first_text_empty() {
        let result = CallToolResult::success(vec![]);
        assert_eq!(first_text(&result), None);
    }
}
