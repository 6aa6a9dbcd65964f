//! Heatwave episode detection.
//!
//! Submodules:
//! - `heatwave` — per-day qualification against the configured heat-index
//!   threshold and the streak scan that finds the winning run.

pub mod heatwave;
