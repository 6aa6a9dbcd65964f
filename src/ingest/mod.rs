//! Payload ingestion for the summarization engine.
//!
//! The engine does not fetch anything itself — the surrounding service
//! owns the HTTP client, caching, and rate limiting. This module only
//! models the payload shape that the forecast collaborator hands over
//! and turns it into typed records the analysis layer can consume.
//!
//! Submodules:
//! - `openweather` — One Call-shaped forecast payload model.

pub mod openweather;
