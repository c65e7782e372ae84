//! fxml-check library
//!
//! Well-formedness checks for JavaFX layout files.
//!
//! The library validates a list of FXML markup files and their companion
//! stylesheets under a target directory:
//! - Markup: parses as XML, `fx:id` values are unique, a stylesheet is referenced
//! - Stylesheets: non-empty, contains at least one rule, uses known `-fx-*` properties
//!
//! # Example
//!
//! ```no_run
//! use fxml_check::{run_checks, FxmlCheckConfig};
//!
//! let config = FxmlCheckConfig::default();
//! let report = run_checks(config).expect("target directory missing");
//! println!("Files passed: {}", report.summary().passed);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod version;

use cli::args::Args;
use engine::orchestrator::{create_checks, CheckOrchestrator, OrchestratorConfig};
use engine::result::ValidationReport;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Re-exports for public API
pub use engine::orchestrator::CheckOrchestrator as Orchestrator;
pub use engine::result::{ResultSummary, ValidationReport as Report};

/// Kind of layout file, which selects the validator that runs on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// FXML markup
    #[serde(alias = "fxml")]
    Markup,
    /// JavaFX CSS
    #[serde(alias = "css")]
    Stylesheet,
}

impl FileKind {
    /// Infer the kind from a file name's extension (`.fxml` or `.css`).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("fxml") {
            Some(FileKind::Markup)
        } else if extension.eq_ignore_ascii_case("css") {
            Some(FileKind::Stylesheet)
        } else {
            None
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Markup => f.pad("FXML"),
            FileKind::Stylesheet => f.pad("CSS"),
        }
    }
}

/// Severity of a single reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

/// One line of output produced while validating a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn ok(message: impl Into<String>) -> Self {
        Finding {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Finding {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Finding {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Statistics gathered by a validator that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FileStats {
    Markup {
        /// Local name of the root element
        root_tag: String,
        /// Number of distinct `fx:id` values
        identifiers: usize,
        /// Whether a `stylesheets` element was found
        has_stylesheets: bool,
    },
    Stylesheet {
        /// Number of `{` characters in the file
        rule_count: usize,
        /// Known `-fx-*` properties present in the file
        properties: Vec<String>,
    },
}

/// Outcome of validating one file.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckResult {
    /// File passed (warnings may still have been reported)
    Pass { duration_ms: u64 },
    /// File failed
    Fail {
        #[serde(serialize_with = "serialize_display")]
        error: FxmlCheckError,
        duration_ms: u64,
    },
}

impl CheckResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass { .. })
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            CheckResult::Pass { duration_ms } | CheckResult::Fail { duration_ms, .. } => {
                *duration_ms
            }
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { .. } => write!(f, "PASS"),
            CheckResult::Fail { error, .. } => write!(f, "FAIL: {}", error),
        }
    }
}

/// A validated file with its findings and result.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    /// File name as listed in the configuration
    pub id: String,
    /// Full path that was validated
    pub path: PathBuf,
    pub kind: FileKind,
    /// Lines reported while validating, in order
    pub findings: Vec<Finding>,
    /// Statistics, present when the validator ran to completion
    pub stats: Option<FileStats>,
    pub result: CheckResult,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.result.is_pass()
    }

    pub fn has_warnings(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Warning)
    }
}

/// Error types for fxml-check operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxmlCheckError {
    /// Target directory is absent; aborts the whole run
    #[error("Directory {} does not exist", .path.display())]
    MissingDirectory { path: PathBuf },
    /// A listed file is absent
    #[error("File {} does not exist", .path.display())]
    MissingFile { path: PathBuf },
    /// Markup is not well-formed XML
    #[error("XML parsing failed - {message}")]
    Parse { message: String },
    /// Two elements in one file share an `fx:id`
    #[error("Duplicate fx:id '{id}' found")]
    DuplicateIdentifier { id: String },
    #[error("CSS file is empty")]
    EmptyFile,
    #[error("No CSS rules found")]
    NoRulesFound,
    /// Anything else that went wrong inside a validator
    #[error("{context} failed - {message}")]
    Unexpected { context: String, message: String },
    /// Configuration manifest could not be read or parsed
    #[error("Failed to load config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// A file to validate, relative to the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub name: String,
    pub kind: FileKind,
}

impl FileTarget {
    pub fn new(name: impl Into<String>, kind: FileKind) -> Self {
        FileTarget {
            name: name.into(),
            kind,
        }
    }
}

/// Configuration for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxmlCheckConfig {
    /// Directory the targets live in
    pub target_dir: PathBuf,
    /// Files to validate, in order
    pub targets: Vec<FileTarget>,
    /// Stop after the first failing file
    pub fail_fast: bool,
}

impl Default for FxmlCheckConfig {
    fn default() -> Self {
        FxmlCheckConfig {
            target_dir: PathBuf::from(data::targets::DEFAULT_TARGET_DIR),
            targets: data::targets::default_targets(),
            fail_fast: false,
        }
    }
}

impl FxmlCheckConfig {
    /// Load configuration from a TOML manifest, falling back to defaults
    /// for anything the manifest leaves out.
    pub fn from_file(path: &Path) -> Result<Self, FxmlCheckError> {
        config::Manifest::load(path)?.into_config(path)
    }

    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, FxmlCheckError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(ref dir) = args.dir {
            config.target_dir = dir.clone();
        }
        if args.fail_fast {
            config.fail_fast = true;
        }

        Ok(config)
    }
}

/// Run validation checks.
///
/// Validates every configured file under `config.target_dir` in order and
/// returns the collected report. Per-file problems are recorded in the
/// report; only a missing target directory is returned as an error.
///
/// # Example
///
/// ```no_run
/// use fxml_check::{run_checks, FxmlCheckConfig};
///
/// let config = FxmlCheckConfig {
///     target_dir: "ui/dialogs".into(),
///     ..Default::default()
/// };
///
/// match run_checks(config) {
///     Ok(report) => println!("all valid: {}", report.all_valid()),
///     Err(e) => eprintln!("ERROR: {}", e),
/// }
/// ```
pub fn run_checks(config: FxmlCheckConfig) -> Result<ValidationReport, FxmlCheckError> {
    let orch_config = OrchestratorConfig {
        fail_fast: config.fail_fast,
    };

    let mut orchestrator = CheckOrchestrator::new(config.target_dir.clone(), orch_config);
    orchestrator.register_checks(create_checks(&config.target_dir, &config.targets));
    orchestrator.run_all()
}
