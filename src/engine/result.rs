//! Result aggregation and reporting.
//!
//! Collects per-file checks and derives the run-level summary.

use crate::{Check, CheckResult};
use serde::Serialize;
use std::path::PathBuf;

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub passed: u32,
    /// Passed files that reported at least one warning
    pub warned: u32,
    pub failed: u32,
    pub total: u32,
    pub total_duration_ms: u64,
}

/// Validation report containing all check results
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub target_dir: PathBuf,
    pub checks: Vec<Check>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Create a new empty report
    pub fn new(target_dir: PathBuf) -> Self {
        ValidationReport {
            target_dir,
            checks: Vec::new(),
            total_duration_ms: 0,
        }
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        summarize(&self.checks)
    }

    /// True when every file exists and passed its validator
    pub fn all_valid(&self) -> bool {
        self.checks.iter().all(Check::passed)
    }

    /// Find a check by the file name it was configured with
    pub fn get(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// Get only failed checks
    pub fn failures(&self) -> Vec<&Check> {
        self.checks.iter().filter(|c| !c.passed()).collect()
    }
}

fn summarize(checks: &[Check]) -> ResultSummary {
    let mut summary = ResultSummary::default();

    for check in checks {
        summary.total += 1;

        match &check.result {
            CheckResult::Pass { duration_ms } => {
                summary.passed += 1;
                if check.has_warnings() {
                    summary.warned += 1;
                }
                summary.total_duration_ms += duration_ms;
            }
            CheckResult::Fail { duration_ms, .. } => {
                summary.failed += 1;
                summary.total_duration_ms += duration_ms;
            }
        }
    }

    summary
}

/// Result aggregator for collecting check results
pub struct ResultAggregator {
    target_dir: PathBuf,
    checks: Vec<Check>,
    total_duration_ms: u64,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new(target_dir: PathBuf) -> Self {
        ResultAggregator {
            target_dir,
            checks: Vec::new(),
            total_duration_ms: 0,
        }
    }

    pub fn set_total_duration(&mut self, total_duration_ms: u64) {
        self.total_duration_ms = total_duration_ms;
    }

    /// Add a completed check result
    pub fn add_result(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Get summary statistics
    pub fn get_summary(&self) -> ResultSummary {
        summarize(&self.checks)
    }

    /// Create final validation report
    pub fn into_report(self) -> ValidationReport {
        ValidationReport {
            target_dir: self.target_dir,
            checks: self.checks,
            total_duration_ms: self.total_duration_ms,
        }
    }
}
