//! MCP Server implementation.
//!
//! [`McpServer`] implements rmcp's `ServerHandler`. It owns the tool registry
//! built at startup; the rmcp `ToolRouter` and the HTTP transport both
//! dispatch into that same registry.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Every tool this server exposes.
    registry: Arc<ToolRegistry>,

    /// rmcp routes backed by `registry`.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server around an already-built registry.
    pub fn new(config: Config, registry: ToolRegistry) -> Self {
        let registry = Arc::new(registry);

        Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config: Arc::new(config),
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Usage hint sent to clients on initialization.
    pub fn instructions(&self) -> String {
        format!(
            "{} exposes these tools: {}.",
            self.name(),
            self.tool_names().join(", ")
        )
    }

    pub fn tool_names(&self) -> Vec<&'static str> {
        self.registry.tool_names()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        self.registry.invoke_value(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
