//! FXML markup checks.
//!
//! Decodes the raw bytes per the byte order mark or XML declaration, parses
//! the document with `roxmltree` and walks every element once for `fx:id`
//! uniqueness and once for a `stylesheets` link.

use super::FileOutcome;
use crate::data::targets::{
    is_container_root, FXML_ID_ATTRIBUTE, FXML_NAMESPACE, STYLESHEETS_ELEMENT,
};
use crate::{FileStats, Finding, FxmlCheckError};
use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, ParsingOptions};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Validate a single FXML file
pub fn validate_markup(path: &Path) -> FileOutcome {
    let mut findings = Vec::new();

    match inspect_markup(path, &mut findings) {
        Ok(stats) => FileOutcome::passed(findings, stats),
        Err(error) => {
            debug!(path = %path.display(), %error, "markup check failed");
            FileOutcome::failed(findings, error)
        }
    }
}

fn inspect_markup(path: &Path, findings: &mut Vec<Finding>) -> Result<FileStats, FxmlCheckError> {
    let bytes = fs::read(path).map_err(|e| FxmlCheckError::Unexpected {
        context: "Validation".to_string(),
        message: e.to_string(),
    })?;
    let text = decode_markup(&bytes)?;
    let document = parse_document(&text)?;

    let root = document.root_element();
    let root_tag = root.tag_name().name();
    if !is_container_root(root_tag) {
        findings.push(Finding::warning(format!(
            "Root element '{}' might not be a typical JavaFX container",
            root_tag
        )));
    }

    let identifiers = collect_identifiers(&document)?;
    debug!(path = %path.display(), root = root_tag, ids = identifiers.len(), "parsed markup");

    findings.push(Finding::ok("Valid XML structure"));
    findings.push(Finding::ok(format!(
        "Found {} unique fx:id attributes",
        identifiers.len()
    )));

    let has_stylesheets = has_stylesheet_reference(&document);
    if has_stylesheets {
        findings.push(Finding::ok("Stylesheet reference found"));
    } else {
        findings.push(Finding::warning("No stylesheet reference found"));
    }

    Ok(FileStats::Markup {
        root_tag: root_tag.to_string(),
        identifiers: identifiers.len(),
        has_stylesheets,
    })
}

/// Decode raw markup bytes into text.
///
/// A byte order mark wins, then the `encoding` of the XML declaration, then
/// UTF-8. Undecodable bytes are a parse error, like any other malformed input.
pub fn decode_markup(bytes: &[u8]) -> Result<Cow<'_, str>, FxmlCheckError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => match declared_encoding(bytes) {
            Some(label) => {
                let encoding = Encoding::for_label(label).ok_or_else(|| FxmlCheckError::Parse {
                    message: format!("unknown encoding '{}'", String::from_utf8_lossy(label)),
                })?;
                (encoding, bytes)
            }
            None => (UTF_8, bytes),
        },
    };

    if encoding == UTF_8 {
        return std::str::from_utf8(body).map(Cow::Borrowed).map_err(|e| {
            let (line, column) = text_position(&body[..e.valid_up_to()]);
            FxmlCheckError::Parse {
                message: format!("invalid UTF-8 byte at {}:{}", line, column),
            }
        });
    }

    debug!(encoding = encoding.name(), "decoding markup");
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| FxmlCheckError::Parse {
            message: format!("invalid {} byte sequence", encoding.name()),
        })
}

/// The `encoding` pseudo-attribute of a leading `<?xml ... ?>` declaration
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let declaration = bytes.strip_prefix(b"<?xml")?;
    let end = declaration.windows(2).position(|w| w == b"?>")?;
    let declaration = &declaration[..end];

    let start = declaration.windows(8).position(|w| w == b"encoding")? + 8;
    let rest = skip_whitespace(&declaration[start..]).strip_prefix(b"=")?;
    let (&quote, rest) = skip_whitespace(rest).split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let len = rest.iter().position(|&b| b == quote)?;
    Some(&rest[..len])
}

fn skip_whitespace(bytes: &[u8]) -> &[u8] {
    let n = bytes.iter().take_while(|b| b.is_ascii_whitespace()).count();
    &bytes[n..]
}

/// 1-based line and column just past `valid`, which is well-formed UTF-8
fn text_position(valid: &[u8]) -> (usize, usize) {
    let text = String::from_utf8_lossy(valid);
    let line = text.matches('\n').count() + 1;
    let column = text.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}

/// Parse markup text, accepting a leading byte order mark and DTDs
pub fn parse_document(text: &str) -> Result<Document<'_>, FxmlCheckError> {
    let source = text.strip_prefix('\u{feff}').unwrap_or(text);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    Document::parse_with_options(source, options).map_err(|e| FxmlCheckError::Parse {
        message: e.to_string(),
    })
}

/// Collect `fx:id` values in document order.
///
/// Stops at the first value seen twice; later duplicates are not reported.
/// Empty values are skipped.
pub fn collect_identifiers<'a>(document: &'a Document<'_>) -> Result<Vec<&'a str>, FxmlCheckError> {
    let mut seen = HashSet::new();
    let mut identifiers = Vec::new();

    for node in document.root_element().descendants().filter(|n| n.is_element()) {
        let Some(id) = node.attribute((FXML_NAMESPACE, FXML_ID_ATTRIBUTE)) else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        if !seen.insert(id) {
            return Err(FxmlCheckError::DuplicateIdentifier { id: id.to_string() });
        }
        identifiers.push(id);
    }

    Ok(identifiers)
}

/// Check for a `stylesheets` element under any (or no) namespace
pub fn has_stylesheet_reference(document: &Document<'_>) -> bool {
    document
        .root_element()
        .descendants()
        .any(|n| n.is_element() && n.tag_name().name() == STYLESHEETS_ELEMENT)
}
