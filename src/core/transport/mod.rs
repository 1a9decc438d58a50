//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the normal MCP mode - feature: `stdio`
//! - **HTTP**: JSON-RPC over POST, for curl and browser clients - feature: `http`
//!
//! Each transport owns the connection lifecycle and hands tool calls to the
//! server's registry.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
