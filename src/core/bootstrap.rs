//! Process startup shared by every server binary.
//!
//! Startup order: logging, tool registry, server handler, transport. The
//! registry is built exactly once and moved into the server.

use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use super::config::Config;
use super::error::Result;
use super::server::McpServer;
use super::transport::TransportService;
use crate::domains::tools::build_registry;

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the STDIO transport.
pub fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the tools for `config`, then serve them until the transport stops.
pub async fn serve(config: Config) -> Result<()> {
    info!(
        "Starting {} v{} (profile: {})",
        config.server.name,
        config.server.version,
        config.profile.as_str()
    );

    for warning in &config.warnings {
        warn!("{}", warning);
    }

    let registry = build_registry(&config)?;
    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, registry);

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");
    Ok(())
}
