//! Validation check modules.
//!
//! One validator per file kind:
//! - Markup: FXML well-formedness and `fx:id` uniqueness
//! - Stylesheet: JavaFX CSS rule and property heuristics
//!
//! # Graceful Degradation
//!
//! Validators never return `Err` and never panic on bad input:
//! - Unreadable or non-UTF-8 file: failed outcome with a generic error
//! - Malformed content: failed outcome with the specific error
//! - Advisory heuristics (root container, stylesheet link, known
//!   properties): warning findings only, the file still passes
//!
//! Every problem ends up both as an `ERROR:`/`WARNING:` finding and, for
//! failures, as the outcome's error.

pub mod markup;
pub mod stylesheet;

use crate::{FileKind, FileStats, Finding, FxmlCheckError};
use std::path::Path;

/// Signature shared by all validators
pub type ValidatorFn = fn(&Path) -> FileOutcome;

/// Everything a validator reports about one file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub findings: Vec<Finding>,
    pub stats: Option<FileStats>,
    pub error: Option<FxmlCheckError>,
}

impl FileOutcome {
    /// Outcome for a file that passed
    pub fn passed(findings: Vec<Finding>, stats: FileStats) -> Self {
        FileOutcome {
            findings,
            stats: Some(stats),
            error: None,
        }
    }

    /// Outcome for a file that failed; the error is appended as a finding
    pub fn failed(mut findings: Vec<Finding>, error: FxmlCheckError) -> Self {
        findings.push(Finding::error(error.to_string()));
        FileOutcome {
            findings,
            stats: None,
            error: Some(error),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.error.is_none()
    }
}

/// Get the validator for a file kind
pub fn validator_for(kind: FileKind) -> ValidatorFn {
    match kind {
        FileKind::Markup => markup::validate_markup,
        FileKind::Stylesheet => stylesheet::validate_stylesheet,
    }
}
