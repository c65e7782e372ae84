//! JavaFX CSS checks.
//!
//! Substring heuristics only; the text is never parsed as CSS.

use super::FileOutcome;
use crate::data::targets::KNOWN_FX_PROPERTIES;
use crate::{FileStats, Finding, FxmlCheckError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Validate a single stylesheet
pub fn validate_stylesheet(path: &Path) -> FileOutcome {
    let mut findings = Vec::new();

    match inspect_stylesheet(path, &mut findings) {
        Ok(stats) => FileOutcome::passed(findings, stats),
        Err(error) => {
            debug!(path = %path.display(), %error, "stylesheet check failed");
            FileOutcome::failed(findings, error)
        }
    }
}

fn inspect_stylesheet(
    path: &Path,
    findings: &mut Vec<Finding>,
) -> Result<FileStats, FxmlCheckError> {
    let content = fs::read_to_string(path).map_err(|e| FxmlCheckError::Unexpected {
        context: "CSS validation".to_string(),
        message: e.to_string(),
    })?;

    if content.trim().is_empty() {
        return Err(FxmlCheckError::EmptyFile);
    }

    let rule_count = count_rules(&content);
    if rule_count == 0 {
        return Err(FxmlCheckError::NoRulesFound);
    }
    findings.push(Finding::ok(format!("CSS file contains {} rules", rule_count)));

    let properties = known_properties(&content);
    debug!(
        path = %path.display(),
        rules = rule_count,
        properties = properties.len(),
        "scanned stylesheet"
    );

    if properties.is_empty() {
        findings.push(Finding::warning("No common JavaFX CSS properties found"));
    } else {
        findings.push(Finding::ok(format!(
            "Found JavaFX CSS properties: {}",
            properties.join(", ")
        )));
    }

    Ok(FileStats::Stylesheet {
        rule_count,
        properties: properties.into_iter().map(String::from).collect(),
    })
}

/// Count rule blocks by their opening brace
pub fn count_rules(content: &str) -> usize {
    content.matches('{').count()
}

/// Known `-fx-*` properties appearing anywhere in the text, in table order
pub fn known_properties(content: &str) -> Vec<&'static str> {
    KNOWN_FX_PROPERTIES
        .iter()
        .copied()
        .filter(|property| content.contains(property))
        .collect()
}
