//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `schema.rs` - Declarative input schemas and argument validation
//! - `registry.rs` - Central tool registry and dispatch
//! - `router.rs` - Registry construction per profile and the rmcp ToolRouter bridge
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Provide a `definition()` and implement `ToolHandler`
//! 3. Export in `definitions/mod.rs`
//! 4. Register it in `router::build_registry()`
//!
//! **No need to modify `server.rs` or any transport!**

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;
pub mod schema;

pub use error::ToolError;
pub use handlers::{ToolDefinition, ToolHandler, decode_params, first_text, text_result};
pub use registry::ToolRegistry;
pub use router::{build_registry, build_tool_router};
pub use schema::{FieldKind, FieldSpec, InputSchema};
