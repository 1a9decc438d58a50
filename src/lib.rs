//! Weather & event planning MCP servers.
//!
//! This crate provides Model Context Protocol servers that expose weather and
//! event planning tools to a calling agent.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, startup wiring, the MCP server
//!   handler and transports
//! - **domains::tools**: the tool registry, input schemas and tool definitions
//!   - `WeatherInfo`: sample weather data, works offline
//!   - `RealWeatherInfo`: live conditions from WeatherAPI.com
//!   - `SmartEventPlanner`: event summary combined with live weather
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::core::{Config, ServerProfile, bootstrap};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::for_profile(ServerProfile::Weather);
//!     bootstrap::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result, ServerProfile};
