//! Validation engine module.
//!
//! Drives the configured file checks and aggregates their results.

pub mod orchestrator;
pub mod result;
