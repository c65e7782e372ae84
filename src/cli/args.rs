//! Command line arguments for fxml-check.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Validate the configured files (default)
    #[default]
    Check,
    /// List the configured files without validating them
    List,
    /// Print version information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Console log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Parsed command line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "fxml-check", version)]
#[command(about = "Well-formedness checks for JavaFX FXML layouts and their stylesheets")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing the files to validate
    #[arg(long, value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Load the file list from a TOML manifest
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Include durations and statistics in text output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Stop after the first failing file
    #[arg(long, global = true)]
    pub fail_fast: bool,

    /// Log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,
}

impl Args {
    /// Command to run, `check` when none was given
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}
