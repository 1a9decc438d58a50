//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - Registration of tool definitions with their handlers
//! - Argument validation against each tool's input schema
//! - Dispatch of validated calls (used by every transport)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{debug, instrument, warn};

use super::error::ToolError;
use super::handlers::{ToolDefinition, ToolHandler};

struct RegisteredTool {
    definition: ToolDefinition,
    handler: Arc<dyn ToolHandler>,
}

/// Tool registry - owns every tool the server exposes.
///
/// Built once at startup and immutable afterwards; listing order follows
/// registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Fails if a tool with the same name already exists.
    pub fn register(
        &mut self,
        definition: ToolDefinition,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), ToolError> {
        if self.contains(definition.name) {
            return Err(ToolError::duplicate(definition.name));
        }

        debug!("Registered tool: {}", definition.name);
        self.tools.push(RegisteredTool {
            definition,
            handler,
        });
        Ok(())
    }

    /// Whether a tool with `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.definition.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| to_tool(&t.definition)).collect()
    }

    /// Validate `arguments` against the tool's schema and run its handler.
    #[instrument(skip(self, arguments))]
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(tool) = self.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let validated = tool.definition.input_schema.validate(arguments).map_err(|e| {
            warn!("Rejected call to {}: {}", name, e);
            e
        })?;

        Ok(tool.handler.call(validated).await)
    }

    /// Like [`invoke`](Self::invoke) but takes an arbitrary JSON value, as
    /// received from the HTTP transport.
    pub async fn invoke_value(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            serde_json::Value::Null => None,
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "expected an object, got {}",
                    other
                )));
            }
        };
        self.invoke(name, arguments).await
    }

    fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.definition.name == name)
    }
}

/// Create a Tool model from a definition.
fn to_tool(definition: &ToolDefinition) -> Tool {
    Tool {
        name: definition.name.into(),
        description: Some(definition.description.into()),
        input_schema: definition.input_schema.to_json_schema(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}
