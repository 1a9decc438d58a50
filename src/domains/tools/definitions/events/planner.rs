//! Event planning tool.
//!
//! Combines event details with the live weather report for the event location.
//! The weather lookup is a direct call into the `RealWeatherInfo` handler, not
//! a round trip through the transport.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::domains::tools::definitions::weather::UnitSystem;
use crate::domains::tools::handlers::{
    ToolDefinition, ToolHandler, decode_params, first_text, text_result,
};
use crate::domains::tools::schema::{FieldSpec, InputSchema};

/// Used when the weather lookup produced no text.
pub const WEATHER_FALLBACK: &str = "Could not retrieve weather information.";

/// Parameters for the event planner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPlanParams {
    pub event_name: String,
    pub event_time: String,
    pub event_location: String,
    #[serde(default)]
    pub weather_unit: UnitSystem,
}

/// Event planning tool.
///
/// `weather` is normally the registered [`RealWeatherInfoTool`] instance.
///
/// [`RealWeatherInfoTool`]: crate::domains::tools::definitions::RealWeatherInfoTool
#[derive(Clone)]
pub struct SmartEventPlannerTool {
    weather: Arc<dyn ToolHandler>,
}

impl SmartEventPlannerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "SmartEventPlanner";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Plan an event: summarises the event name, time and location together with the current weather at the event location.";

    pub fn new(weather: Arc<dyn ToolHandler>) -> Self {
        Self { weather }
    }

    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            input_schema: InputSchema::new()
                .field(FieldSpec::required_string("eventName", "Name of the event"))
                .field(FieldSpec::required_string(
                    "eventTime",
                    "When the event takes place",
                ))
                .field(FieldSpec::required_string(
                    "eventLocation",
                    "City or place where the event takes place",
                ))
                .field(FieldSpec::string_enum(
                    "weatherUnit",
                    UnitSystem::VALUES,
                    "metric",
                    "Measurement system for the weather report",
                )),
        }
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(event = %params.event_name))]
    pub async fn execute(&self, params: &EventPlanParams) -> CallToolResult {
        info!("Planning event at {}", params.event_location);

        let mut weather_args = JsonObject::new();
        weather_args.insert("location".into(), params.event_location.clone().into());
        weather_args.insert("unit".into(), params.weather_unit.as_str().into());

        let lookup = AssertUnwindSafe(self.weather.call(weather_args))
            .catch_unwind()
            .await;

        match lookup {
            Ok(weather) => {
                let weather_text = first_text(&weather).unwrap_or(WEATHER_FALLBACK);
                text_result(compose_plan(params, weather_text))
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("Weather lookup for event failed: {}", message);
                text_result(format!(
                    "Error planning event '{}': {}",
                    params.event_name, message
                ))
            }
        }
    }
}

/// Render the plan message.
pub fn compose_plan(params: &EventPlanParams, weather: &str) -> String {
    format!(
        "Event Plan: {}\nTime: {}\nLocation: {}\n\nWeather Conditions:\n{}",
        params.event_name, params.event_time, params.event_location, weather
    )
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "weather lookup failed unexpectedly".to_string()
    }
}

#[async_trait::async_trait]
impl ToolHandler for SmartEventPlannerTool {
    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let event_name = arguments
            .get("eventName")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        match decode_params::<EventPlanParams>(arguments) {
            Ok(params) => self.execute(&params).await,
            Err(e) => {
                error!("Error in {}: {}", Self::NAME, e);
                text_result(format!("Error planning event '{}': {}", event_name, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::weather::real::tests::{StubApi, tool};
    use crate::domains::tools::definitions::weather::{RealWeatherInfoTool, RealWeatherParams};
    use serde_json::json;

    /// Weather source whose result carries no text at all.
    struct SilentWeather;

    #[async_trait::async_trait]
    impl ToolHandler for SilentWeather {
        async fn call(&self, _arguments: JsonObject) -> CallToolResult {
            CallToolResult::success(vec![])
        }
    }

    fn planner(stub: StubApi) -> (SmartEventPlannerTool, Arc<RealWeatherInfoTool>) {
        let weather = Arc::new(tool(stub));
        (SmartEventPlannerTool::new(weather.clone()), weather)
    }

    fn params(unit: UnitSystem) -> EventPlanParams {
        EventPlanParams {
            event_name: "Rust Meetup".to_string(),
            event_time: "2026-11-05 18:30".to_string(),
            event_location: "London".to_string(),
            weather_unit: unit,
        }
    }

    #[tokio::test]
    async fn test_plan_embeds_event_and_weather() {
        let (planner, weather) = planner(StubApi::Conditions);

        for unit in [UnitSystem::Metric, UnitSystem::Imperial] {
            let result = planner.execute(&params(unit)).await;
            let text = first_text(&result).unwrap();

            let direct = weather
                .execute(&RealWeatherParams {
                    location: "London".to_string(),
                    unit,
                })
                .await;
            let weather_text = first_text(&direct).unwrap();

            assert!(text.contains("Rust Meetup"));
            assert!(text.contains("2026-11-05 18:30"));
            assert!(text.contains("London"));
            assert!(text.contains(weather_text));
        }
    }

    #[tokio::test]
    async fn test_plan_layout() {
        let (planner, _) = planner(StubApi::Conditions);
        let result = planner.execute(&params(UnitSystem::Metric)).await;
        assert_eq!(
            first_text(&result),
            Some(
                "Event Plan: Rust Meetup\nTime: 2026-11-05 18:30\nLocation: London\n\n\
                 Weather Conditions:\n\
                 Current weather in London: 11°C, Light rain, Humidity: 87%, Wind: 19.1 km/h"
            )
        );
    }

    #[tokio::test]
    async fn test_plan_carries_unconfigured_message() {
        let planner = SmartEventPlannerTool::new(Arc::new(RealWeatherInfoTool::unconfigured()));
        let result = planner.execute(&params(UnitSystem::Metric)).await;
        assert!(
            first_text(&result)
                .unwrap()
                .ends_with("WeatherAPI key not configured.")
        );
    }

    #[tokio::test]
    async fn test_plan_survives_weather_panic() {
        let (planner, _) = planner(StubApi::Panics);
        let result = planner.execute(&params(UnitSystem::Metric)).await;
        assert_eq!(
            first_text(&result),
            Some("Error planning event 'Rust Meetup': provider exploded")
        );
    }

    #[tokio::test]
    async fn test_handler_decodes_camel_case() {
        let (planner, _) = planner(StubApi::Conditions);
        let args = json!({
            "eventName": "Picnic",
            "eventTime": "noon",
            "eventLocation": "London",
            "weatherUnit": "imperial"
        });
        let result = planner.call(args.as_object().cloned().unwrap()).await;
        let text = first_text(&result).unwrap();
        assert!(text.starts_with("Event Plan: Picnic"));
        assert!(text.contains("51.8°F"));
    }

    #[test]
    fn test_schema_matches_params() {
        let definition = SmartEventPlannerTool::definition();
        let names: Vec<_> = definition.input_schema.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["eventName", "eventTime", "eventLocation", "weatherUnit"]);

        let validated = definition
            .input_schema
            .validate(
                json!({ "eventName": "Picnic", "eventTime": "noon", "eventLocation": "Oslo" })
                    .as_object()
                    .cloned(),
            )
            .unwrap();
        let params: EventPlanParams = decode_params(validated).unwrap();
        assert_eq!(params.weather_unit, UnitSystem::Metric);
    }

    #[tokio::test]
    async fn test_fallback_when_weather_has_no_text() {
        let planner = SmartEventPlannerTool::new(Arc::new(SilentWeather));
        let result = planner.execute(&params(UnitSystem::Metric)).await;
        assert_eq!(
            first_text(&result),
            Some(
                "Event Plan: Rust Meetup\nTime: 2026-11-05 18:30\nLocation: London\n\n\
                 Weather Conditions:\n\
                 Could not retrieve weather information."
            )
        );
    }
}
