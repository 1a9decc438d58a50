//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use std::str::FromStr;

use super::error::Error;
use super::transport::TransportConfig;
use crate::domains::tools::definitions::weather::api::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Which set of tools this process exposes.
    pub profile: ServerProfile,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Weather provider endpoint settings.
    pub weather: WeatherApiConfig,

    /// Problems found while reading the environment. Loading runs before
    /// logging is initialized, so these are logged by `bootstrap::serve`.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Tool set exposed by a server process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerProfile {
    /// `WeatherInfo` and `RealWeatherInfo`.
    Weather,
    /// `RealWeatherInfo` and `SmartEventPlanner`.
    Events,
    /// Every tool.
    #[default]
    All,
}

impl ServerProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Events => "events",
            Self::All => "all",
        }
    }

    /// Name reported to clients when `MCP_SERVER_NAME` is not set.
    pub fn default_server_name(self) -> &'static str {
        match self {
            Self::Weather => "weather-server",
            Self::Events => "event-planner-server",
            Self::All => "weather-mcp-server",
        }
    }

    pub fn includes_mock_weather(self) -> bool {
        matches!(self, Self::Weather | Self::All)
    }

    pub fn includes_event_planner(self) -> bool {
        matches!(self, Self::Events | Self::All)
    }
}

impl FromStr for ServerProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weather" => Ok(Self::Weather),
            "events" | "event-planner" => Ok(Self::Events),
            "all" => Ok(Self::All),
            other => Err(Error::config(format!("unknown server profile '{}'", other))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// WeatherAPI.com key. Get a free key at: https://www.weatherapi.com/
    pub weather_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "weather_api_key",
                &self.weather_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Weather provider endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// Base URL, without the trailing `/current.json`.
    pub base_url: String,

    /// Timeout for a single provider request, in seconds.
    pub timeout_secs: u64,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let profile = ServerProfile::default();
        Self {
            server: ServerConfig {
                name: profile.default_server_name().to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            profile,
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            weather: WeatherApiConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// The profile comes from `MCP_SERVER_PROFILE` (default: `all`).
    pub fn from_env() -> Self {
        Self::load(None)
    }

    /// Load configuration from environment variables with a fixed profile.
    ///
    /// Used by the dedicated server binaries; `MCP_SERVER_PROFILE` is ignored.
    pub fn for_profile(profile: ServerProfile) -> Self {
        Self::load(Some(profile))
    }

    fn load(profile: Option<ServerProfile>) -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        config.profile = match (profile, std::env::var("MCP_SERVER_PROFILE")) {
            (Some(fixed), _) => fixed,
            (None, Ok(value)) => match value.parse() {
                Ok(parsed) => parsed,
                Err(e) => {
                    config.warnings.push(format!("{} - falling back to 'all'", e));
                    ServerProfile::All
                }
            },
            (None, Err(_)) => ServerProfile::All,
        };

        config.server.name = std::env::var("MCP_SERVER_NAME")
            .unwrap_or_else(|_| config.profile.default_server_name().to_string());

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load WeatherAPI key; a missing key is reported when the tool is built
        config.credentials.weather_api_key = std::env::var("WEATHER_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if let Ok(base_url) = std::env::var("MCP_WEATHER_API_URL") {
            config.weather.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MCP_WEATHER_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.weather.timeout_secs = secs,
                _ => config.warnings.push(format!(
                    "Invalid MCP_WEATHER_TIMEOUT_SECS '{}', keeping {}s",
                    timeout, config.weather.timeout_secs
                )),
            }
        }

        config
    }
}
