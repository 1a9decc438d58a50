//! Tool Router - builds the registry for a server profile and bridges it to
//! the rmcp ToolRouter.
//!
//! Every route delegates to [`ToolRegistry::invoke`], so validation and
//! dispatch behave identically on STDIO and HTTP.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};
use tracing::info;

use crate::core::config::{Config, ServerProfile};

use super::definitions::{RealWeatherInfoTool, SmartEventPlannerTool, WeatherInfoTool};
use super::error::ToolError;
use super::registry::ToolRegistry;

/// Build the tool registry for the configured profile.
pub fn build_registry(config: &Config) -> crate::Result<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    let profile = config.profile;

    if profile.includes_mock_weather() {
        registry.register(WeatherInfoTool::definition(), Arc::new(WeatherInfoTool::new()))?;
    }

    let real_weather = Arc::new(RealWeatherInfoTool::from_config(config)?);
    registry.register(RealWeatherInfoTool::definition(), real_weather.clone())?;

    if profile.includes_event_planner() {
        registry.register(
            SmartEventPlannerTool::definition(),
            Arc::new(SmartEventPlannerTool::new(real_weather)),
        )?;
    }

    info!(
        "Registered {} tool(s) for profile '{}'",
        registry.tool_names().len(),
        profile.as_str()
    );
    Ok(registry)
}

/// Map a registry rejection to an MCP protocol error.
pub fn to_mcp_error(error: ToolError) -> McpError {
    McpError::invalid_params(error.to_string(), None)
}

/// Build the rmcp tool router with one route per registered tool.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .tools()
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            let name = tool.name.to_string();
            let registry = registry.clone();

            router.with_route(ToolRoute::new_dyn(
                tool,
                move |ctx: ToolCallContext<'_, S>| {
                    let args = ctx.arguments.clone();
                    let registry = registry.clone();
                    let name = name.clone();
                    async move { registry.invoke(&name, args).await.map_err(to_mcp_error) }.boxed()
                },
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    fn config(profile: ServerProfile) -> Config {
        let mut config = Config::default();
        config.profile = profile;
        config
    }

    #[test]
    fn test_weather_profile() {
        let registry = build_registry(&config(ServerProfile::Weather)).unwrap();
        assert_eq!(registry.tool_names(), vec!["WeatherInfo", "RealWeatherInfo"]);
    }

    #[test]
    fn test_events_profile() {
        let registry = build_registry(&config(ServerProfile::Events)).unwrap();
        assert_eq!(
            registry.tool_names(),
            vec!["RealWeatherInfo", "SmartEventPlanner"]
        );
    }

    #[test]
    fn test_all_profile() {
        let registry = build_registry(&config(ServerProfile::All)).unwrap();
        assert_eq!(
            registry.tool_names(),
            vec!["WeatherInfo", "RealWeatherInfo", "SmartEventPlanner"]
        );
    }

    #[test]
    fn test_router_matches_registry() {
        let registry = Arc::new(build_registry(&config(ServerProfile::All)).unwrap());
        let router: ToolRouter<TestServer> = build_tool_router(registry.clone());

        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(router_names.len(), registry.tool_names().len());
        for name in registry.tool_names() {
            assert!(router_names.contains(&name));
        }
    }

    #[tokio::test]
    async fn test_registry_dispatches_sample_weather() {
        let registry = build_registry(&config(ServerProfile::All)).unwrap();
        let args = serde_json::json!({ "location": "Tokyo" });
        let result = registry
            .invoke_value("WeatherInfo", args)
            .await
            .unwrap();
        assert_eq!(
            super::super::handlers::first_text(&result),
            Some("Current weather in Tokyo: 20°C, Sunny, Humidity: 50%, Wind: 8 km/h")
        );
    }

    #[tokio::test]
    async fn test_registry_rejects_bad_planner_call() {
        let registry = build_registry(&config(ServerProfile::Events)).unwrap();
        let args = serde_json::json!({ "eventName": "Picnic", "eventLocation": "Paris" });
        let err = registry
            .invoke_value("SmartEventPlanner", args)
            .await
            .unwrap_err();
        assert_eq!(err.field(), Some("eventTime"));
    }

    #[test]
    fn test_mcp_error_mapping() {
        let err = to_mcp_error(ToolError::not_found("Nope"));
        assert!(err.message.contains("Nope"));
    }
}
