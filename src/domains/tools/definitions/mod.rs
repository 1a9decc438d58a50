//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod events;
pub mod weather;

pub use events::SmartEventPlannerTool;
pub use weather::{RealWeatherInfoTool, WeatherInfoTool};
