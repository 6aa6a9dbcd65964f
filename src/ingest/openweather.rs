//! Forecast payload model (OpenWeatherMap One Call shape).
//!
//! The upstream collaborator combines a One Call forecast with a
//! satellite cloud-density reading and hands the merged object over
//! as-is. Only the `forecast.daily` branch matters to summarization;
//! everything else (`satellite_density`, `current`, `hourly`, request
//! echoes) is ignored on deserialization.
//!
//! Every leaf field is optional. A day missing `temp.max` or `humidity`
//! is still a valid record — qualification treats it as a
//! non-qualifying day rather than an error. Only a type mismatch
//! (e.g. `daily` is not an array) fails the parse.

use serde::Deserialize;

// ============================================================================
// Payload Structures
// ============================================================================

/// Top-level payload from the forecast collaborator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub forecast: Forecast,
}

/// The forecast branch of the payload. `daily` defaults to empty when
/// the provider sent nothing, so an absent forecast degrades to an
/// empty summary instead of an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

/// One day of the forecast sequence, ordered by ascending `dt`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyForecast {
    /// Unix timestamp, seconds. Strictly increasing across the sequence.
    pub dt: Option<i64>,
    #[serde(default)]
    pub temp: TempRange,
    /// Relative humidity, percent.
    pub humidity: Option<f64>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

/// Daily temperature extremes, degrees Celsius.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TempRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// One entry of the per-day condition list; only `main` is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub main: String,
}

impl DailyForecast {
    /// The dominant condition label for the day: the first condition
    /// entry's `main` field, or empty when the list is absent or empty.
    pub fn weather_label(&self) -> &str {
        self.weather.first().map(|w| w.main.as_str()).unwrap_or("")
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a payload from JSON text. Unknown fields are ignored; missing
/// `forecast` or `daily` produce an empty sequence.
pub fn parse_payload(json: &str) -> Result<ForecastPayload, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Tests
// ============================================================================
