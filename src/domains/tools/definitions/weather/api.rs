//! WeatherAPI.com client.
//!
//! A single "current conditions" lookup. The client is hidden behind the
//! [`WeatherApi`] trait so tools can be exercised without network access.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::config::WeatherApiConfig;

// ============================================================================
// Configuration & Constants
// ============================================================================

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

const USER_AGENT: &str = concat!("weather-mcp-server/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Response Structures
// ============================================================================

/// Body of a `current.json` response.
///
/// On failure the provider omits `current` and fills `error` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    #[serde(default)]
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub error: Option<ProviderError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_mph: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

/// Error object reported by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Transport-level failures talking to the provider.
#[derive(Debug, Error)]
pub enum WeatherApiError {
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

// ============================================================================
// Client
// ============================================================================

/// Source of current weather conditions.
#[async_trait::async_trait]
pub trait WeatherApi: Send + Sync {
    /// Fetch current conditions for `location`.
    async fn current(&self, location: &str) -> Result<CurrentResponse, WeatherApiError>;
}

/// HTTP client for WeatherAPI.com.
pub struct WeatherApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    /// Create a client with the configured endpoint and timeout.
    pub fn new(api_key: impl Into<String>, config: &WeatherApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Full request URL for `location`. Contains the API key.
    pub fn request_url(&self, location: &str) -> Result<String, WeatherApiError> {
        let query = serde_urlencoded::to_string(&[("key", self.api_key.as_str()), ("q", location)])?;
        Ok(format!("{}/current.json?{}", self.base_url, query))
    }
}

#[async_trait::async_trait]
impl WeatherApi for WeatherApiClient {
    #[instrument(skip(self))]
    async fn current(&self, location: &str) -> Result<CurrentResponse, WeatherApiError> {
        // The request URL carries the API key; it must not reach error text.
        let response = self
            .http
            .get(self.request_url(location)?)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        // The provider reports lookup failures as a JSON error body with a 4xx
        // status, so the body is parsed regardless of status.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?;
        debug!("Provider responded {} ({} bytes)", status, body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}
