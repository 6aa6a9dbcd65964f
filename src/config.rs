//! Detection thresholds for the heatwave engine.
//!
//! The defaults match the operational tuning the service shipped with;
//! callers that need a different sensitivity construct or load their own
//! `HeatwaveConfig` instead of patching constants. Loadable from TOML so
//! the surrounding service can keep thresholds in its config file next
//! to its other settings.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Heat index at or above this value (°C) makes a day qualify.
pub const DEFAULT_HI_THRESHOLD_C: f64 = 40.0;

/// Minimum length of a qualifying run to count as a heatwave episode.
pub const DEFAULT_MIN_CONSECUTIVE_DAYS: usize = 3;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Tunable parameters for heatwave detection.
///
/// Both thresholds are inclusive: a heat index of exactly
/// `hi_threshold_c` qualifies, and a run of exactly
/// `min_consecutive_days` is an episode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeatwaveConfig {
    pub hi_threshold_c: f64,
    pub min_consecutive_days: usize,
}

impl Default for HeatwaveConfig {
    fn default() -> Self {
        HeatwaveConfig {
            hi_threshold_c: DEFAULT_HI_THRESHOLD_C,
            min_consecutive_days: DEFAULT_MIN_CONSECUTIVE_DAYS,
        }
    }
}

impl HeatwaveConfig {
    /// Parses a config from TOML text. Absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads a config from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&text)?)
    }
}
