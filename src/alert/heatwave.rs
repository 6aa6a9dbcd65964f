//! Heatwave episode detection.
//!
//! A heatwave is a contiguous run of days whose heat index meets or
//! exceeds the configured threshold, lasting at least the configured
//! minimum number of days. "Contiguous" means adjacent positions in the
//! input sequence — the scan never looks at timestamp deltas, so gaps
//! in the provider's calendar do not break a run.

use crate::analysis::heat_index::compute_heat_index;
use crate::config::HeatwaveConfig;
use crate::ingest::openweather::DailyForecast;
use crate::model::{HeatwaveEpisode, SummaryError};

// ---------------------------------------------------------------------------
// Qualification
// ---------------------------------------------------------------------------

/// Whether a single day counts toward a heatwave run.
///
/// Requires both `temp.max` and `humidity`; a day missing either is
/// non-qualifying, never an error. The threshold is inclusive.
pub fn day_qualifies(day: &DailyForecast, config: &HeatwaveConfig) -> bool {
    match (day.temp.max, day.humidity) {
        (Some(max_temp), Some(humidity)) => {
            compute_heat_index(max_temp, humidity) >= config.hi_threshold_c
        }
        _ => false,
    }
}

/// The qualification vector for a forecast sequence, in input order.
pub fn qualification_vector(days: &[DailyForecast], config: &HeatwaveConfig) -> Vec<bool> {
    days.iter().map(|day| day_qualifies(day, config)).collect()
}

// ---------------------------------------------------------------------------
// Streak scan
// ---------------------------------------------------------------------------

/// A contiguous run of `true` positions in a qualification vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Index of the first position in the run.
    pub start: usize,
    /// Number of positions in the run.
    pub len: usize,
}

/// Finds the longest run of `true` values in a single left-to-right
/// scan. Ties go to the earliest run: the best run is only replaced on
/// strict improvement, never on equality.
///
/// Returns `None` when the vector contains no `true` at all.
pub fn longest_run(flags: &[bool]) -> Option<Run> {
    let mut best: Option<Run> = None;
    let mut current_start = 0;
    let mut current_len = 0;

    for (i, &flag) in flags.iter().enumerate() {
        if flag {
            if current_len == 0 {
                current_start = i;
            }
            current_len += 1;
            if best.map_or(true, |b| current_len > b.len) {
                best = Some(Run {
                    start: current_start,
                    len: current_len,
                });
            }
        } else {
            current_len = 0;
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Episode detection
// ---------------------------------------------------------------------------

/// Runs qualification and the streak scan over a forecast sequence and
/// builds the episode.
///
/// The winning run must span at least `config.min_consecutive_days`
/// records (inclusive) to produce a positive episode, anchored on the
/// run's first and last `dt`. A record inside the winning run without a
/// `dt` cannot anchor the window and fails the whole payload as
/// malformed — `summarize` turns that into the degraded empty result.
pub fn detect_heatwave(
    days: &[DailyForecast],
    config: &HeatwaveConfig,
) -> Result<HeatwaveEpisode, SummaryError> {
    let flags = qualification_vector(days, config);

    let run = match longest_run(&flags) {
        Some(run) if run.len >= config.min_consecutive_days => run,
        _ => return Ok(HeatwaveEpisode::not_detected()),
    };

    let start = days[run.start].dt.ok_or_else(|| {
        SummaryError::MalformedPayload("first record of detected streak has no dt".to_string())
    })?;
    let end = days[run.start + run.len - 1].dt.ok_or_else(|| {
        SummaryError::MalformedPayload("last record of detected streak has no dt".to_string())
    })?;

    Ok(HeatwaveEpisode::detected(start, end, run.len))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::openweather::TempRange;

    fn day(dt: i64, max_temp: f64, humidity: f64) -> DailyForecast {
        DailyForecast {
            dt: Some(dt),
            temp: TempRange {
                min: Some(max_temp - 10.0),
                max: Some(max_temp),
            },
            humidity: Some(humidity),
            weather: Vec::new(),
        }
    }

    /// 42 °C at 60 % → heat index ~71 °C, qualifies under the default
    /// 40 °C threshold; 30 °C at 50 % → ~31 °C, does not.
    fn hot(dt: i64) -> DailyForecast {
        day(dt, 42.0, 60.0)
    }

    fn mild(dt: i64) -> DailyForecast {
        day(dt, 30.0, 50.0)
    }

    // --- Qualification ------------------------------------------------------

    #[test]
    fn test_qualification_requires_both_fields() {
        let config = HeatwaveConfig::default();

        let mut no_humidity = hot(0);
        no_humidity.humidity = None;
        assert!(!day_qualifies(&no_humidity, &config));

        let mut no_max = hot(0);
        no_max.temp.max = None;
        assert!(
            !day_qualifies(&no_max, &config),
            "missing max_temp must disqualify, not error"
        );

        assert!(day_qualifies(&hot(0), &config));
        assert!(!day_qualifies(&mild(0), &config));
    }

    #[test]
    fn test_qualification_threshold_is_inclusive() {
        // Threshold pinned to the exact heat index of the day, so the
        // comparison sits precisely on the boundary.
        let d = hot(0);
        let exact = compute_heat_index(42.0, 60.0);
        let config = HeatwaveConfig {
            hi_threshold_c: exact,
            min_consecutive_days: 3,
        };
        assert!(day_qualifies(&d, &config), ">= means the boundary qualifies");
    }

    // --- Streak scan --------------------------------------------------------

    #[test]
    fn test_leftmost_longest_tie_break() {
        // [F,T,T,T,F,T,T]: the length-3 run at 1..=3 wins over the
        // trailing length-2 run.
        let flags = [false, true, true, true, false, true, true];
        let run = longest_run(&flags).expect("vector contains true");
        assert_eq!(run, Run { start: 1, len: 3 });
    }

    #[test]
    fn test_equal_length_runs_keep_the_first() {
        let flags = [true, true, false, true, true];
        let run = longest_run(&flags).expect("vector contains true");
        assert_eq!(
            run,
            Run { start: 0, len: 2 },
            "ties must not be overwritten by a later run of equal length"
        );
    }

    #[test]
    fn test_later_strictly_longer_run_wins() {
        let flags = [true, true, false, true, true, true];
        let run = longest_run(&flags).expect("vector contains true");
        assert_eq!(run, Run { start: 3, len: 3 });
    }

    #[test]
    fn test_empty_and_all_false_vectors_have_no_run() {
        assert_eq!(longest_run(&[]), None);
        assert_eq!(longest_run(&[false, false, false]), None);
    }

    #[test]
    fn test_single_true_is_a_run_of_one() {
        assert_eq!(
            longest_run(&[false, true, false]),
            Some(Run { start: 1, len: 1 })
        );
    }

    // --- Episode detection --------------------------------------------------

    #[test]
    fn test_run_of_exactly_min_days_is_an_episode() {
        let config = HeatwaveConfig::default();
        let days = vec![mild(0), hot(100), hot(200), hot(300), mild(400)];

        let episode = detect_heatwave(&days, &config).expect("dt present everywhere");
        assert!(episode.is_heatwave, "exactly min_consecutive_days qualifies");
        assert_eq!(episode.start_timestamp, Some(100));
        assert_eq!(episode.end_timestamp, Some(300));
        assert_eq!(episode.duration_days, Some(3));
    }

    #[test]
    fn test_run_of_min_days_minus_one_is_not_an_episode() {
        let config = HeatwaveConfig::default();
        let days = vec![hot(0), hot(100), mild(200)];

        let episode = detect_heatwave(&days, &config).expect("dt present everywhere");
        assert!(!episode.is_heatwave);
        assert!(episode.message.is_some());
    }

    #[test]
    fn test_empty_sequence_yields_negative_episode() {
        let episode = detect_heatwave(&[], &HeatwaveConfig::default())
            .expect("empty input is not an error");
        assert!(!episode.is_heatwave);
    }

    #[test]
    fn test_all_disqualified_yields_negative_episode() {
        let config = HeatwaveConfig::default();
        let days: Vec<_> = (0..5).map(|i| mild(i * 100)).collect();
        let episode = detect_heatwave(&days, &config).expect("no error expected");
        assert!(!episode.is_heatwave);
    }

    #[test]
    fn test_missing_dt_inside_winning_run_is_malformed() {
        let config = HeatwaveConfig::default();
        let mut days = vec![hot(0), hot(100), hot(200)];
        days[0].dt = None;

        let err = detect_heatwave(&days, &config).expect_err("window cannot be anchored");
        assert!(matches!(err, SummaryError::MalformedPayload(_)));
    }

    #[test]
    fn test_custom_config_changes_sensitivity() {
        // Two consecutive hot days: no episode by default, an episode
        // once the minimum drops to 2.
        let days = vec![hot(0), hot(100), mild(200)];

        let default_config = HeatwaveConfig::default();
        assert!(!detect_heatwave(&days, &default_config).unwrap().is_heatwave);

        let sensitive = HeatwaveConfig {
            min_consecutive_days: 2,
            ..HeatwaveConfig::default()
        };
        let episode = detect_heatwave(&days, &sensitive).unwrap();
        assert!(episode.is_heatwave);
        assert_eq!(episode.duration_days, Some(2));
    }
}
