//! Output formatting for fxml-check.
//!
//! Provides terminal and JSON output formatters.
//!
//! All formatters produce valid output for any ValidationReport input,
//! including an empty one. No function in this module will panic.

use crate::cli::args::OutputFormat;
use crate::engine::result::{ResultSummary, ValidationReport};
use crate::{Check, CheckResult, FileStats, FxmlCheckError, Severity};
use serde::Serialize;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool) -> Self {
        TerminalFormatter { color, verbose }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn gray(&self, text: &str) -> String {
        self.colorize(text, "90")
    }

    fn format_check(&self, check: &Check, output: &mut String) {
        let missing = matches!(
            check.result,
            CheckResult::Fail {
                error: FxmlCheckError::MissingFile { .. },
                ..
            }
        );

        if !missing {
            output.push_str(&format!("Validating {}...\n", check.path.display()));
        }

        for finding in &check.findings {
            let line = match finding.severity {
                Severity::Ok => format!("  {} {}", self.green("✓"), finding.message),
                Severity::Warning => format!("  {} {}", self.yellow("WARNING:"), finding.message),
                // Missing files are reported at the top level, without a header
                Severity::Error if missing => format!("{} {}", self.red("ERROR:"), finding.message),
                Severity::Error => format!("  {} {}", self.red("ERROR:"), finding.message),
            };
            output.push_str(&line);
            output.push('\n');
        }

        let status = if check.passed() {
            self.green("[PASS]")
        } else {
            self.red("[FAIL]")
        };

        if self.verbose {
            let duration_ms = check.result.duration_ms();
            let detail = match &check.stats {
                Some(stats) => format!("{}, {}ms", describe_stats(stats), duration_ms),
                None => format!("{}ms", duration_ms),
            };
            output.push_str(&format!(
                "  {} {} {}\n",
                status,
                check.id,
                self.gray(&format!("({})", detail))
            ));
        } else {
            output.push_str(&format!("  {} {}\n", status, check.id));
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        for check in &report.checks {
            self.format_check(check, &mut output);
            output.push('\n');
        }

        let summary = report.summary();
        output.push_str(&format!(
            "SUMMARY: {} passed, {} with warnings, {} failed\n",
            summary.passed, summary.warned, summary.failed
        ));
        if self.verbose {
            output.push_str(&format!(
                "Total time: {:.3}s\n",
                report.total_duration_ms as f64 / 1000.0
            ));
        }

        if report.all_valid() {
            output.push_str(&self.green(&format!(
                "✓ All files in {} validated successfully!",
                report.target_dir.display()
            )));
        } else {
            output.push_str(&self.red("✗ Some validation errors found"));
        }

        output
    }
}

fn describe_stats(stats: &FileStats) -> String {
    match stats {
        FileStats::Markup {
            root_tag,
            identifiers,
            has_stylesheets,
        } => format!(
            "root {}, {} fx:id, stylesheets {}",
            root_tag,
            identifiers,
            if *has_stylesheets { "linked" } else { "missing" }
        ),
        FileStats::Stylesheet {
            rule_count,
            properties,
        } => format!("{} rules, {} known properties", rule_count, properties.len()),
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    target_dir: &'a Path,
    all_valid: bool,
    summary: ResultSummary,
    total_duration_ms: u64,
    checks: &'a [Check],
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let view = JsonReport {
            target_dir: &report.target_dir,
            all_valid: report.all_valid(),
            summary: report.summary(),
            total_duration_ms: report.total_duration_ms,
            checks: &report.checks,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&view)
        } else {
            serde_json::to_string(&view)
        };

        rendered.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(format: OutputFormat, color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(color, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
