//! Weather observation shared by the mock and remote providers.

use std::fmt;

/// Temperature scale of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
}

impl TemperatureScale {
    /// Unit letter used after the degree sign.
    pub fn letter(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }
}

/// Convert a Celsius temperature to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// A single point-in-time weather reading.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub scale: TemperatureScale,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub wind_speed_unit: &'static str,
}

impl WeatherObservation {
    /// One-line summary for `location`.
    pub fn describe(&self, location: &str) -> String {
        format!("Current weather in {}: {}", location, self)
    }
}

impl fmt::Display for WeatherObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{}, {}, Humidity: {}%, Wind: {} {}",
            self.temperature,
            self.scale.letter(),
            self.condition,
            self.humidity,
            self.wind_speed,
            self.wind_speed_unit
        )
    }
}
