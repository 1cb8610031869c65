//! Terminal presentation layer
//!
//! This module handles human-readable output for the commands. JSON output
//! is produced by the commands themselves with `serde_json`.

pub mod display;
