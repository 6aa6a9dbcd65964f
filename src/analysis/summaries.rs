//! Summary assembly: the public boundary of the engine.
//!
//! `try_summarize` is the explicit pipeline — lenient payload parse,
//! one detection pass, per-day classification, weekly rollup — and
//! reports a malformed payload as `Err`. `summarize` is what the
//! service layer calls: it never fails, collapsing any error into the
//! canonical empty result after logging the reason. Callers can rely on
//! always receiving a well-shaped `AggregateResult`.

use chrono::DateTime;
use serde_json::Value;

use crate::alert::heatwave::detect_heatwave;
use crate::config::HeatwaveConfig;
use crate::ingest::openweather::{DailyForecast, ForecastPayload};
use crate::logging::{self, DataSource};
use crate::model::{
    AggregateResult, DailySummary, HeatwaveEpisode, HeatwaveStatus, SummaryError, WeeklySummary,
    MISSING_DATE_LABEL,
};

// ---------------------------------------------------------------------------
// Public boundary
// ---------------------------------------------------------------------------

/// Summarizes a forecast payload. Never fails: a payload that cannot be
/// summarized produces `AggregateResult::empty()`, with the reason
/// logged at warn level. This degradation is part of the contract, not
/// a side effect — downstream serialization can always proceed.
pub fn summarize(payload: &Value, config: &HeatwaveConfig) -> AggregateResult {
    match try_summarize(payload, config) {
        Ok(result) => result,
        Err(err) => {
            logging::log_degradation(&err);
            AggregateResult::empty()
        }
    }
}

/// The fallible pipeline behind [`summarize`], for callers that want
/// the failure reason (diagnostics, tests) instead of silent
/// degradation.
pub fn try_summarize(
    payload: &Value,
    config: &HeatwaveConfig,
) -> Result<AggregateResult, SummaryError> {
    let payload: ForecastPayload = serde_json::from_value(payload.clone())
        .map_err(|e| SummaryError::MalformedPayload(e.to_string()))?;
    summarize_days(&payload.forecast.daily, config)
}

/// Summarizes an already-typed daily sequence. Useful when the caller
/// deserialized the payload itself.
pub fn summarize_days(
    days: &[DailyForecast],
    config: &HeatwaveConfig,
) -> Result<AggregateResult, SummaryError> {
    let episode = detect_heatwave(days, config)?;

    if episode.is_heatwave {
        logging::info(
            DataSource::Forecast,
            None,
            &format!(
                "heatwave detected: {} day(s) from {} to {}",
                episode.duration_days.unwrap_or(0),
                episode.start_timestamp.unwrap_or(0),
                episode.end_timestamp.unwrap_or(0),
            ),
        );
    }

    let daily: Vec<DailySummary> = days
        .iter()
        .map(|day| build_daily_summary(day, &episode))
        .collect();
    let weekly = weekly_rollup(&daily);

    Ok(AggregateResult {
        daily,
        weekly,
        heatwave: episode,
    })
}

// ---------------------------------------------------------------------------
// Daily summaries
// ---------------------------------------------------------------------------

/// Formats a Unix timestamp as a `YYYY-MM-DD` calendar date in UTC.
///
/// UTC is a fixed convention: the same payload produces the same labels
/// on every host. Absent or unrepresentable timestamps yield `"N/A"`.
pub fn date_label(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| MISSING_DATE_LABEL.to_string())
}

/// Builds the summary for one day. A day is `Heatwave` iff a positive
/// episode exists and the day's `dt` falls inside its inclusive window;
/// membership is derived from the window rather than by re-running
/// qualification, so every day inside the winning run is labeled even
/// if its fields were carried through unchanged.
fn build_daily_summary(day: &DailyForecast, episode: &HeatwaveEpisode) -> DailySummary {
    let status = match day.dt {
        Some(ts) if episode.contains(ts) => HeatwaveStatus::Heatwave,
        _ => HeatwaveStatus::NoHeatwave,
    };

    DailySummary {
        date_label: date_label(day.dt),
        min_temp: day.temp.min,
        max_temp: day.temp.max,
        humidity: day.humidity,
        weather_label: day.weather_label().to_string(),
        status,
        timestamp: day.dt,
    }
}

// ---------------------------------------------------------------------------
// Weekly rollup
// ---------------------------------------------------------------------------

/// Tallies daily classifications. Every summary lands in exactly one
/// counter, so the counts always sum to `daily.len()`.
pub fn weekly_rollup(daily: &[DailySummary]) -> WeeklySummary {
    let heatwave_days = daily
        .iter()
        .filter(|d| d.status == HeatwaveStatus::Heatwave)
        .count();

    WeeklySummary {
        heatwave_days,
        non_heatwave_days: daily.len() - heatwave_days,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
