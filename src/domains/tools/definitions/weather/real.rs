//! Live weather tool backed by WeatherAPI.com.
//!
//! Every outcome, including a missing API key, a provider-reported error or a
//! network failure, is returned as a text result.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use super::api::{CurrentConditions, WeatherApi, WeatherApiClient};
use super::observation::{TemperatureScale, WeatherObservation};
use crate::core::config::Config;
use crate::domains::tools::handlers::{ToolDefinition, ToolHandler, decode_params, text_result};
use crate::domains::tools::schema::{FieldSpec, InputSchema};

/// Text returned when no provider key is configured.
pub const NOT_CONFIGURED: &str = "WeatherAPI key not configured.";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Measurement system for provider readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Accepted values, as declared in tool schemas.
    pub const VALUES: &'static [&'static str] = &["metric", "imperial"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

/// Parameters for the live weather tool.
#[derive(Debug, Clone, Deserialize)]
pub struct RealWeatherParams {
    /// City or place name.
    pub location: String,

    #[serde(default)]
    pub unit: UnitSystem,
}

/// Pick the fields matching `unit` out of a provider reading.
pub fn observation_from(current: &CurrentConditions, unit: UnitSystem) -> WeatherObservation {
    let (temperature, scale, wind_speed, wind_speed_unit) = match unit {
        UnitSystem::Metric => (
            current.temp_c,
            TemperatureScale::Celsius,
            current.wind_kph,
            "km/h",
        ),
        UnitSystem::Imperial => (
            current.temp_f,
            TemperatureScale::Fahrenheit,
            current.wind_mph,
            "mph",
        ),
    };

    WeatherObservation {
        temperature,
        scale,
        condition: current.condition.text.clone(),
        humidity: current.humidity,
        wind_speed,
        wind_speed_unit,
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Live weather tool.
///
/// Holds no client when the API key is absent; every call then answers with
/// [`NOT_CONFIGURED`].
#[derive(Clone)]
pub struct RealWeatherInfoTool {
    api: Option<Arc<dyn WeatherApi>>,
}

impl RealWeatherInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "RealWeatherInfo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get live current weather for a location from WeatherAPI.com. Returns temperature, conditions, humidity and wind speed in metric or imperial units.";

    /// Create the tool from server configuration.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        match config.credentials.weather_api_key.as_deref() {
            Some(key) => {
                let client = WeatherApiClient::new(key, &config.weather)?;
                Ok(Self::with_api(Arc::new(client)))
            }
            None => {
                warn!("WEATHER_API_KEY not set - {} will report it as unconfigured", Self::NAME);
                Ok(Self::unconfigured())
            }
        }
    }

    /// Create the tool around an existing provider.
    pub fn with_api(api: Arc<dyn WeatherApi>) -> Self {
        Self { api: Some(api) }
    }

    /// Create a tool without provider credentials.
    pub fn unconfigured() -> Self {
        Self { api: None }
    }

    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            input_schema: InputSchema::new()
                .field(FieldSpec::required_string(
                    "location",
                    "City or place name, e.g. \"London\"",
                ))
                .field(FieldSpec::string_enum(
                    "unit",
                    UnitSystem::VALUES,
                    "metric",
                    "Measurement system",
                )),
        }
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(location = %params.location, unit = ?params.unit))]
    pub async fn execute(&self, params: &RealWeatherParams) -> CallToolResult {
        let Some(api) = &self.api else {
            return text_result(NOT_CONFIGURED);
        };

        info!("Fetching live weather");

        let response = match api.current(&params.location).await {
            Ok(response) => response,
            Err(e) => {
                error!("Weather request failed: {}", e);
                return text_result(format!(
                    "Error fetching weather data for {}: {}",
                    params.location, e
                ));
            }
        };

        if let Some(provider_error) = response.error {
            warn!("Provider error: {}", provider_error.message);
            return text_result(format!(
                "Error fetching weather for {}: {}",
                params.location, provider_error.message
            ));
        }

        match response.current {
            Some(current) => {
                text_result(observation_from(&current, params.unit).describe(&params.location))
            }
            None => {
                error!("Provider response carried neither conditions nor an error");
                text_result(format!(
                    "Error fetching weather data for {}: response contained no current conditions",
                    params.location
                ))
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for RealWeatherInfoTool {
    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        match decode_params::<RealWeatherParams>(arguments) {
            Ok(params) => self.execute(&params).await,
            Err(e) => {
                error!("Error in {}: {}", Self::NAME, e);
                text_result(format!("Error fetching weather data: {}", e))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domains::tools::definitions::weather::api::{
        Condition, CurrentResponse, ProviderError, WeatherApiError, tests as api_tests,
    };
    use crate::domains::tools::handlers::first_text;
    use serde_json::json;

    /// Provider stub returning a canned answer.
    pub(crate) enum StubApi {
        Conditions,
        ProviderError(&'static str),
        Empty,
        InvalidBody,
        Panics,
    }

    pub(crate) fn london() -> CurrentConditions {
        CurrentConditions {
            temp_c: 11.0,
            temp_f: 51.8,
            condition: Condition {
                text: "Light rain".to_string(),
            },
            humidity: 87,
            wind_kph: 19.1,
            wind_mph: 11.9,
        }
    }

    #[async_trait::async_trait]
    impl WeatherApi for StubApi {
        async fn current(&self, _location: &str) -> Result<CurrentResponse, WeatherApiError> {
            match self {
                Self::Conditions => Ok(CurrentResponse {
                    current: Some(london()),
                    error: None,
                }),
                Self::ProviderError(message) => Ok(CurrentResponse {
                    current: None,
                    error: Some(ProviderError {
                        code: Some(1006),
                        message: message.to_string(),
                    }),
                }),
                Self::Empty => Ok(CurrentResponse {
                    current: None,
                    error: None,
                }),
                Self::InvalidBody => Err(serde_json::from_str::<CurrentResponse>("<html>")
                    .unwrap_err()
                    .into()),
                Self::Panics => panic!("provider exploded"),
            }
        }
    }

    pub(crate) fn tool(stub: StubApi) -> RealWeatherInfoTool {
        RealWeatherInfoTool::with_api(Arc::new(stub))
    }

    fn params(location: &str, unit: UnitSystem) -> RealWeatherParams {
        RealWeatherParams {
            location: location.to_string(),
            unit,
        }
    }

    #[test]
    fn test_unit_values_match_serde_enum() {
        for value in UnitSystem::VALUES {
            let unit: UnitSystem = serde_json::from_value(json!(value)).unwrap();
            assert_eq!(unit.as_str(), *value);
        }
        assert_eq!(UnitSystem::VALUES.len(), 2);

        let definition = RealWeatherInfoTool::definition();
        let unit = &definition.input_schema.fields()[1];
        let default: UnitSystem = serde_json::from_value(unit.default.clone().unwrap()).unwrap();
        assert_eq!(default, UnitSystem::default());
    }

    #[tokio::test]
    async fn test_not_configured() {
        let tool = RealWeatherInfoTool::unconfigured();
        for unit in [UnitSystem::Metric, UnitSystem::Imperial] {
            let result = tool.execute(&params("Anywhere", unit)).await;
            assert_eq!(first_text(&result), Some(NOT_CONFIGURED));
        }
    }

    #[test]
    fn test_from_config_without_key_is_unconfigured() {
        let mut config = Config::default();
        config.credentials.weather_api_key = None;
        let tool = RealWeatherInfoTool::from_config(&config).unwrap();
        assert!(tool.api.is_none());
    }

    #[tokio::test]
    async fn test_metric_report() {
        let result = tool(StubApi::Conditions)
            .execute(&params("London", UnitSystem::Metric))
            .await;
        assert_eq!(
            first_text(&result),
            Some("Current weather in London: 11°C, Light rain, Humidity: 87%, Wind: 19.1 km/h")
        );
    }

    #[tokio::test]
    async fn test_imperial_report() {
        let result = tool(StubApi::Conditions)
            .execute(&params("London", UnitSystem::Imperial))
            .await;
        assert_eq!(
            first_text(&result),
            Some("Current weather in London: 51.8°F, Light rain, Humidity: 87%, Wind: 11.9 mph")
        );
    }

    #[tokio::test]
    async fn test_provider_error_is_reported_as_text() {
        let result = tool(StubApi::ProviderError("No matching location found."))
            .execute(&params("Atlantis", UnitSystem::Metric))
            .await;
        let text = first_text(&result).unwrap();
        assert!(text.contains("No matching location found."));
        assert!(text.contains("Atlantis"));
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_parse_failure_is_reported_as_text() {
        let result = tool(StubApi::InvalidBody)
            .execute(&params("Oslo", UnitSystem::Metric))
            .await;
        let text = first_text(&result).unwrap();
        assert!(text.starts_with("Error fetching weather data for Oslo: invalid response"));
    }

    #[tokio::test]
    async fn test_empty_response() {
        let result = tool(StubApi::Empty)
            .execute(&params("Oslo", UnitSystem::Metric))
            .await;
        assert!(first_text(&result).unwrap().contains("no current conditions"));
    }

    #[tokio::test]
    async fn test_network_failure_text_omits_api_key() {
        let mut config = Config::default();
        config.credentials.weather_api_key = Some("secret-weather-key".to_string());
        config.weather.base_url = api_tests::refused_base_url();

        let tool = RealWeatherInfoTool::from_config(&config).unwrap();
        let result = tool.execute(&params("Oslo", UnitSystem::Metric)).await;
        let text = first_text(&result).unwrap();

        assert!(text.starts_with("Error fetching weather data for Oslo: request failed"));
        assert!(!text.contains("secret-weather-key"));
    }

    #[tokio::test]
    async fn test_handler_defaults_to_metric() {
        let args = json!({ "location": "London" });
        let result = tool(StubApi::Conditions)
            .call(args.as_object().cloned().unwrap())
            .await;
        assert!(first_text(&result).unwrap().contains("11°C"));
    }
}
