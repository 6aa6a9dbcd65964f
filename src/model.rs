//! Core data types for the heatwave summarization engine.
//!
//! This module defines the shared domain model imported by all other
//! modules. It contains no logic beyond small accessors, no I/O, and no
//! external dependencies apart from serde for the output boundary —
//! every type here is intended for direct serialization into a service
//! response.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Informational message attached to a negative heatwave episode.
pub const NO_HEATWAVE_MESSAGE: &str = "No heatwave predicted in the next 10 days.";

/// Date label used when a daily record carries no usable timestamp.
pub const MISSING_DATE_LABEL: &str = "N/A";

// ---------------------------------------------------------------------------
// Daily classification
// ---------------------------------------------------------------------------

/// Per-day heatwave classification.
///
/// Serialized as the strings `"Heatwave"` / `"No Heatwave"` consumed by
/// the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeatwaveStatus {
    Heatwave,
    #[serde(rename = "No Heatwave")]
    NoHeatwave,
}

impl std::fmt::Display for HeatwaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeatwaveStatus::Heatwave => write!(f, "Heatwave"),
            HeatwaveStatus::NoHeatwave => write!(f, "No Heatwave"),
        }
    }
}

/// Summary of a single forecast day, in input order.
///
/// Temperatures and humidity are carried through from the provider
/// payload as-is; either may be absent on a degraded record. `timestamp`
/// is retained so downstream consumers can join summaries back onto the
/// raw forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// Calendar date in UTC, `YYYY-MM-DD`, or `"N/A"` when `dt` is absent.
    #[serde(rename = "date")]
    pub date_label: String,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub humidity: Option<f64>,
    /// Dominant condition label, empty when the provider sent none.
    #[serde(rename = "weather")]
    pub weather_label: String,
    #[serde(rename = "heatwave")]
    pub status: HeatwaveStatus,
    #[serde(rename = "dt")]
    pub timestamp: Option<i64>,
}

// ---------------------------------------------------------------------------
// Episode and rollup types
// ---------------------------------------------------------------------------

/// A detected (or absent) heatwave episode: the leftmost-longest
/// contiguous run of qualifying days, when long enough to count.
///
/// When `is_heatwave` is true the window fields are populated; otherwise
/// only `message` is. Computed fresh per aggregation call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatwaveEpisode {
    pub is_heatwave: bool,
    #[serde(rename = "start_date", skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<i64>,
    #[serde(rename = "end_date", skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<i64>,
    /// Number of records in the winning run.
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HeatwaveEpisode {
    /// A positive episode spanning `[start_timestamp, end_timestamp]`.
    pub fn detected(start_timestamp: i64, end_timestamp: i64, duration_days: usize) -> Self {
        HeatwaveEpisode {
            is_heatwave: true,
            start_timestamp: Some(start_timestamp),
            end_timestamp: Some(end_timestamp),
            duration_days: Some(duration_days),
            message: None,
        }
    }

    /// A negative episode carrying the fixed absence message.
    pub fn not_detected() -> Self {
        HeatwaveEpisode {
            is_heatwave: false,
            start_timestamp: None,
            end_timestamp: None,
            duration_days: None,
            message: Some(NO_HEATWAVE_MESSAGE.to_string()),
        }
    }

    /// Whether `timestamp` falls inside the episode window, inclusive on
    /// both ends. Always false for a negative episode.
    pub fn contains(&self, timestamp: i64) -> bool {
        match (self.is_heatwave, self.start_timestamp, self.end_timestamp) {
            (true, Some(start), Some(end)) => timestamp >= start && timestamp <= end,
            _ => false,
        }
    }
}

/// Weekly rollup of daily classifications.
///
/// `heatwave_days + non_heatwave_days` always equals the number of daily
/// summaries in the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub heatwave_days: usize,
    pub non_heatwave_days: usize,
}

/// Top-level output of one aggregation call. Fully owned by the caller;
/// the engine retains no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub daily: Vec<DailySummary>,
    pub weekly: WeeklySummary,
    pub heatwave: HeatwaveEpisode,
}

impl AggregateResult {
    /// The canonical well-shaped empty result: no daily entries, zero
    /// counts, absence episode. Returned both for a valid-but-empty
    /// forecast and as the degraded fallback for malformed payloads.
    pub fn empty() -> Self {
        AggregateResult {
            daily: Vec::new(),
            weekly: WeeklySummary {
                heatwave_days: 0,
                non_heatwave_days: 0,
            },
            heatwave: HeatwaveEpisode::not_detected(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise while summarizing a forecast payload.
///
/// Missing per-day fields are not errors — they mark the day
/// non-qualifying. The only failure the pipeline can report is a payload
/// whose shape or types do not match the provider contract, and the
/// public boundary collapses even that into the empty result.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryError {
    /// The payload lacks the expected nested structure or carries wrong
    /// types where the provider contract promises numbers/arrays.
    MalformedPayload(String),
}

impl std::fmt::Display for SummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
        }
    }
}

impl std::error::Error for SummaryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_window_is_inclusive_on_both_ends() {
        let episode = HeatwaveEpisode::detected(100, 300, 3);
        assert!(episode.contains(100), "start boundary must be inside the window");
        assert!(episode.contains(200));
        assert!(episode.contains(300), "end boundary must be inside the window");
        assert!(!episode.contains(99));
        assert!(!episode.contains(301));
    }

    #[test]
    fn test_negative_episode_contains_nothing() {
        let episode = HeatwaveEpisode::not_detected();
        assert!(!episode.contains(0));
        assert_eq!(episode.message.as_deref(), Some(NO_HEATWAVE_MESSAGE));
        assert_eq!(episode.start_timestamp, None);
    }

    #[test]
    fn test_empty_result_is_internally_consistent() {
        let empty = AggregateResult::empty();
        assert!(empty.daily.is_empty());
        assert_eq!(
            empty.weekly.heatwave_days + empty.weekly.non_heatwave_days,
            empty.daily.len()
        );
        assert!(!empty.heatwave.is_heatwave);
    }

    #[test]
    fn test_status_serializes_to_downstream_wire_strings() {
        let hw = serde_json::to_value(HeatwaveStatus::Heatwave).unwrap();
        let no = serde_json::to_value(HeatwaveStatus::NoHeatwave).unwrap();
        assert_eq!(hw, "Heatwave");
        assert_eq!(no, "No Heatwave");
    }
}
