//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the MCP server handler, startup wiring and
//! the transport layer.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, ServerProfile};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
