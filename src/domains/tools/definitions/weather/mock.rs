//! Offline weather tool backed by sample data.
//!
//! Known cities come from a fixed table; any other location gets a randomly
//! generated reading. Useful for demos and for clients that have no provider
//! key.

use rand::Rng;
use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;
use tracing::{error, info, instrument};

use super::observation::{TemperatureScale, WeatherObservation, celsius_to_fahrenheit};
use crate::domains::tools::handlers::{ToolDefinition, ToolHandler, decode_params, text_result};
use crate::domains::tools::schema::{FieldSpec, InputSchema};

// ============================================================================
// Sample Data
// ============================================================================

/// A stored reading. Temperatures are Celsius, wind is km/h.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleReading {
    pub temperature_c: i32,
    pub condition: &'static str,
    pub humidity: u8,
    pub wind_kph: u8,
}

const fn reading(
    temperature_c: i32,
    condition: &'static str,
    humidity: u8,
    wind_kph: u8,
) -> SampleReading {
    SampleReading {
        temperature_c,
        condition,
        humidity,
        wind_kph,
    }
}

/// Known locations, keyed by lowercase name.
pub const SAMPLE_WEATHER: &[(&str, SampleReading)] = &[
    ("new york", reading(15, "Cloudy", 65, 12)),
    ("london", reading(12, "Rainy", 80, 15)),
    ("tokyo", reading(20, "Sunny", 50, 8)),
    ("sydney", reading(25, "Clear", 45, 10)),
    ("paris", reading(14, "Partly Cloudy", 60, 11)),
];

/// Conditions used for generated readings.
pub const CONDITIONS: [&str; 7] = [
    "Sunny", "Cloudy", "Rainy", "Clear", "Stormy", "Snowy", "Foggy",
];

// ============================================================================
// Tool Parameters
// ============================================================================

/// Temperature unit accepted by the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// Parameters for the sample weather tool.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherInfoParams {
    /// City or place name.
    pub location: String,

    #[serde(default)]
    pub unit: TemperatureUnit,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Sample weather tool.
#[derive(Debug, Clone, Default)]
pub struct WeatherInfoTool;

impl WeatherInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "WeatherInfo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current weather for a location from built-in sample data. Known cities (New York, London, Tokyo, Sydney, Paris) return fixed readings; other locations return generated values.";

    const UNITS: &'static [&'static str] = &["celsius", "fahrenheit"];

    pub fn new() -> Self {
        Self
    }

    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            input_schema: InputSchema::new()
                .field(FieldSpec::required_string(
                    "location",
                    "City or place name, e.g. \"Tokyo\"",
                ))
                .field(FieldSpec::string_enum(
                    "unit",
                    Self::UNITS,
                    "celsius",
                    "Temperature unit",
                )),
        }
    }

    /// Look up `location` in the sample table (case-insensitive).
    pub fn lookup(location: &str) -> Option<SampleReading> {
        let key = location.to_lowercase();
        SAMPLE_WEATHER
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, reading)| *reading)
    }

    /// Generate a random reading.
    pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> SampleReading {
        SampleReading {
            temperature_c: rng.random_range(-5..30),
            condition: CONDITIONS[rng.random_range(0..CONDITIONS.len())],
            humidity: rng.random_range(0..100),
            wind_kph: rng.random_range(0..30),
        }
    }

    /// Build the observation reported for `params`.
    ///
    /// Stored and generated temperatures are Celsius and converted when
    /// Fahrenheit is requested. Wind speed is always reported as stored.
    pub fn observe<R: Rng + ?Sized>(params: &WeatherInfoParams, rng: &mut R) -> WeatherObservation {
        let sample = Self::lookup(&params.location).unwrap_or_else(|| Self::synthesize(rng));

        let celsius = f64::from(sample.temperature_c);
        let (temperature, scale) = match params.unit {
            TemperatureUnit::Celsius => (celsius, TemperatureScale::Celsius),
            TemperatureUnit::Fahrenheit => {
                (celsius_to_fahrenheit(celsius), TemperatureScale::Fahrenheit)
            }
        };

        WeatherObservation {
            temperature: temperature.round(),
            scale,
            condition: sample.condition.to_string(),
            humidity: sample.humidity,
            wind_speed: f64::from(sample.wind_kph),
            wind_speed_unit: "km/h",
        }
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(location = %params.location))]
    pub fn execute<R: Rng + ?Sized>(params: &WeatherInfoParams, rng: &mut R) -> CallToolResult {
        info!("Sample weather requested");
        text_result(Self::observe(params, rng).describe(&params.location))
    }
}

#[async_trait::async_trait]
impl ToolHandler for WeatherInfoTool {
    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let location = arguments
            .get("location")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        match decode_params::<WeatherInfoParams>(arguments) {
            Ok(params) => Self::execute(&params, &mut rand::rng()),
            Err(e) => {
                error!("Error in {}: {}", Self::NAME, e);
                text_result(format!("Error getting weather for {}: {}", location, e))
            }
        }
    }
}
