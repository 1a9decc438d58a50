//! MCP Server Entry Point
//!
//! Serves the tool set selected by `MCP_SERVER_PROFILE` (default: every tool).

use anyhow::Result;

use weather_mcp_server::core::{Config, bootstrap};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    bootstrap::init_logging(&config.logging.level);

    bootstrap::serve(config).await?;

    Ok(())
}
