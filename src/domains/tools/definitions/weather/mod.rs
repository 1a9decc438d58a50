//! Weather tools.
//!
//! - `mock`: `WeatherInfo`, offline sample data
//! - `real`: `RealWeatherInfo`, live data from WeatherAPI.com
//! - `api`: the provider HTTP client
//! - `observation`: reading type and formatting shared by both tools

pub mod api;
pub mod mock;
pub mod observation;
pub mod real;

pub use api::{WeatherApi, WeatherApiClient, WeatherApiError};
pub use mock::{TemperatureUnit, WeatherInfoParams, WeatherInfoTool};
pub use observation::{TemperatureScale, WeatherObservation};
pub use real::{RealWeatherInfoTool, RealWeatherParams, UnitSystem};
