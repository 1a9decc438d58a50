//! Weather server: `WeatherInfo` and `RealWeatherInfo`.

use anyhow::Result;

use weather_mcp_server::core::{Config, ServerProfile, bootstrap};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::for_profile(ServerProfile::Weather);

    bootstrap::init_logging(&config.logging.level);

    bootstrap::serve(config).await?;

    Ok(())
}
