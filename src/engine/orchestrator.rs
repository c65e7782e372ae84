//! Check execution orchestrator.
//!
//! Runs the registered file checks in order against one target directory.
//!
//! # Graceful Degradation
//!
//! This module handles errors gracefully:
//! - Missing target directory: returned as `Err`, nothing is checked
//! - Missing file: recorded as a failed check, the run continues
//! - Validator panics: caught via std::panic::catch_unwind, converted to a failed check
//! - Empty check list: returns an empty report (not an error)
//!
//! Apart from the directory check, every registered check is executed and
//! reported regardless of individual failures, unless fail_fast is enabled.

use crate::checks::{validator_for, FileOutcome};
use crate::engine::result::{ResultAggregator, ValidationReport};
use crate::{Check, CheckResult, FileKind, FileTarget, FxmlCheckError};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Orchestrator configuration
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
    pub fail_fast: bool,
}

/// A registered check with its execution function
pub struct RegisteredCheck {
    /// File name as configured
    pub id: String,
    pub path: PathBuf,
    pub kind: FileKind,
    pub check_fn: Box<dyn Fn(&Path) -> FileOutcome + Send + Sync>,
}

/// Check orchestrator
pub struct CheckOrchestrator {
    config: OrchestratorConfig,
    target_dir: PathBuf,
    checks: Vec<RegisteredCheck>,
}

impl CheckOrchestrator {
    /// Create a new orchestrator for a target directory
    pub fn new(target_dir: PathBuf, config: OrchestratorConfig) -> Self {
        CheckOrchestrator {
            config,
            target_dir,
            checks: Vec::new(),
        }
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RegisteredCheck>) {
        self.checks.extend(checks);
    }

    /// Register a single check
    pub fn register_check(&mut self, check: RegisteredCheck) {
        self.checks.push(check);
    }

    /// IDs of the registered checks, in execution order
    pub fn check_ids(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.id.as_str()).collect()
    }

    /// Run all registered checks
    pub fn run_all(&self) -> Result<ValidationReport, FxmlCheckError> {
        let start = Instant::now();

        if !self.target_dir.is_dir() {
            warn!(dir = %self.target_dir.display(), "target directory not found");
            return Err(FxmlCheckError::MissingDirectory {
                path: self.target_dir.clone(),
            });
        }

        let mut aggregator = ResultAggregator::new(self.target_dir.clone());

        for check in &self.checks {
            let result = self.execute_check(check);
            let failed = !result.passed();
            aggregator.add_result(result);

            if self.config.fail_fast && failed {
                info!(check = %check.id, "stopping after first failure");
                break;
            }
        }

        aggregator.set_total_duration(start.elapsed().as_millis() as u64);
        let summary = aggregator.get_summary();
        info!(
            passed = summary.passed,
            failed = summary.failed,
            total = summary.total,
            "validation finished"
        );

        Ok(aggregator.into_report())
    }

    /// Execute a single check
    fn execute_check(&self, check: &RegisteredCheck) -> Check {
        let start = Instant::now();

        if !check.path.exists() {
            warn!(path = %check.path.display(), "file not found");
            let error = FxmlCheckError::MissingFile {
                path: check.path.clone(),
            };
            return finish(check, FileOutcome::failed(Vec::new(), error), start);
        }

        info!(path = %check.path.display(), kind = %check.kind, "validating");

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            (check.check_fn)(&check.path)
        }));

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(_) => FileOutcome::failed(
                Vec::new(),
                FxmlCheckError::Unexpected {
                    context: "Validation".to_string(),
                    message: "validator panicked".to_string(),
                },
            ),
        };

        finish(check, outcome, start)
    }
}

fn finish(check: &RegisteredCheck, outcome: FileOutcome, start: Instant) -> Check {
    let duration_ms = start.elapsed().as_millis() as u64;
    let result = match outcome.error {
        None => CheckResult::Pass { duration_ms },
        Some(error) => CheckResult::Fail { error, duration_ms },
    };

    Check {
        id: check.id.clone(),
        path: check.path.clone(),
        kind: check.kind,
        findings: outcome.findings,
        stats: outcome.stats,
        result,
    }
}

/// Create registered checks for the given targets under `target_dir`
pub fn create_checks(target_dir: &Path, targets: &[FileTarget]) -> Vec<RegisteredCheck> {
    targets
        .iter()
        .map(|target| RegisteredCheck {
            id: target.name.clone(),
            path: target_dir.join(&target.name),
            kind: target.kind,
            check_fn: Box::new(validator_for(target.kind)),
        })
        .collect()
}
