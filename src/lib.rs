//! Heatwave risk summarization core.
//!
//! Turns a multi-day forecast payload into a structured risk summary:
//! a heat-index classification for every day, detection of contiguous
//! heatwave episodes, and a weekly rollup. Pure computation — fetching
//! the forecast, caching, rate limiting, and serving results over HTTP
//! all belong to the surrounding service, which talks to this crate
//! through [`summarize`] and gets back an [`AggregateResult`] ready for
//! serialization.
//!
//! Each invocation owns its input and produces an independent output;
//! there is no shared state, so concurrent calls need no coordination.

pub mod alert;
pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;

pub use analysis::heat_index::compute_heat_index;
pub use analysis::summaries::{summarize, summarize_days, try_summarize};
pub use config::HeatwaveConfig;
pub use model::{AggregateResult, HeatwaveEpisode, SummaryError};
