//! Derived-metric computation and summary assembly.
//!
//! Everything in here is pure: no I/O, no shared state, deterministic
//! output for a given input. Safe to call concurrently from multiple
//! request handlers as long as each call owns its input.
//!
//! Submodules:
//! - `heat_index` — NOAA heat-index regression over (temperature, humidity).
//! - `summaries` — daily/weekly summary assembly and the public
//!   `summarize` boundary.

pub mod heat_index;
pub mod summaries;
