//! Markup validator tests.

use crate::mocks::{FixtureDir, DUPLICATE_ID_FXML, MALFORMED_FXML, VALID_FXML};
use fxml_check::checks::markup::validate_markup;
use fxml_check::{FileStats, FxmlCheckError, Severity};

fn messages(findings: &[fxml_check::Finding], severity: Severity) -> Vec<&str> {
    findings
        .iter()
        .filter(|f| f.severity == severity)
        .map(|f| f.message.as_str())
        .collect()
}

#[test]
fn test_valid_markup_counts_identifiers() {
    let fixture = FixtureDir::new();
    let path = fixture.write("Dialog.fxml", VALID_FXML);

    let outcome = validate_markup(&path);

    assert!(outcome.is_pass());
    assert_eq!(
        outcome.stats,
        Some(FileStats::Markup {
            root_tag: "BorderPane".to_string(),
            identifiers: 3,
            has_stylesheets: true,
        })
    );
    assert_eq!(
        messages(&outcome.findings, Severity::Ok),
        vec![
            "Valid XML structure",
            "Found 3 unique fx:id attributes",
            "Stylesheet reference found",
        ]
    );
    assert!(messages(&outcome.findings, Severity::Warning).is_empty());
}

#[test]
fn test_markup_without_identifiers() {
    let fixture = FixtureDir::new();
    let path = fixture.write(
        "Empty.fxml",
        r#"<StackPane xmlns:fx="http://javafx.com/fxml/1"><Label text="hi"/></StackPane>"#,
    );

    let outcome = validate_markup(&path);

    assert!(outcome.is_pass());
    assert!(outcome
        .findings
        .iter()
        .any(|f| f.message == "Found 0 unique fx:id attributes"));
}

#[test]
fn test_duplicate_identifier_fails() {
    let fixture = FixtureDir::new();
    let path = fixture.write("Dup.fxml", DUPLICATE_ID_FXML);

    let outcome = validate_markup(&path);

    assert!(!outcome.is_pass());
    assert_eq!(
        outcome.error,
        Some(FxmlCheckError::DuplicateIdentifier {
            id: "okButton".to_string()
        })
    );
    assert_eq!(
        messages(&outcome.findings, Severity::Error),
        vec!["Duplicate fx:id 'okButton' found"]
    );
    // Scan stops before the structure and count lines
    assert!(messages(&outcome.findings, Severity::Ok).is_empty());
    assert!(outcome.stats.is_none());
}

#[test]
fn test_only_first_duplicate_reported() {
    let fixture = FixtureDir::new();
    let path = fixture.write(
        "Dups.fxml",
        r#"<VBox xmlns:fx="http://javafx.com/fxml/1">
             <Label fx:id="first"/><Label fx:id="second"/>
             <Label fx:id="second"/><Label fx:id="first"/>
           </VBox>"#,
    );

    let outcome = validate_markup(&path);

    assert_eq!(
        outcome.error,
        Some(FxmlCheckError::DuplicateIdentifier {
            id: "second".to_string()
        })
    );
    assert_eq!(messages(&outcome.findings, Severity::Error).len(), 1);
}

#[test]
fn test_malformed_markup_reports_parse_error() {
    let fixture = FixtureDir::new();
    let path = fixture.write("Broken.fxml", MALFORMED_FXML);

    let outcome = validate_markup(&path);

    assert!(!outcome.is_pass());
    assert!(matches!(outcome.error, Some(FxmlCheckError::Parse { .. })));
    let errors = messages(&outcome.findings, Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("XML parsing failed - "));
}

#[test]
fn test_unbound_fx_prefix_is_parse_error() {
    let fixture = FixtureDir::new();
    let path = fixture.write("Unbound.fxml", r#"<VBox><Label fx:id="a"/></VBox>"#);

    let outcome = validate_markup(&path);

    assert!(matches!(outcome.error, Some(FxmlCheckError::Parse { .. })));
}

#[test]
fn test_unusual_root_warns_but_passes() {
    let fixture = FixtureDir::new();
    let path = fixture.write(
        "Pane.fxml",
        r#"<DialogPane xmlns:fx="http://javafx.com/fxml/1"><stylesheets/></DialogPane>"#,
    );

    let outcome = validate_markup(&path);

    assert!(outcome.is_pass());
    assert_eq!(
        messages(&outcome.findings, Severity::Warning),
        vec!["Root element 'DialogPane' might not be a typical JavaFX container"]
    );
}

#[test]
fn test_missing_stylesheet_reference_warns() {
    let fixture = FixtureDir::new();
    let path = fixture.write(
        "NoStyle.fxml",
        r#"<HBox xmlns:fx="http://javafx.com/fxml/1"><Label fx:id="a"/></HBox>"#,
    );

    let outcome = validate_markup(&path);

    assert!(outcome.is_pass());
    assert_eq!(
        messages(&outcome.findings, Severity::Warning),
        vec!["No stylesheet reference found"]
    );
    assert!(matches!(
        outcome.stats,
        Some(FileStats::Markup {
            has_stylesheets: false,
            ..
        })
    ));
}

#[test]
fn test_namespaced_stylesheets_element_found() {
    let fixture = FixtureDir::new();
    let path = fixture.write(
        "Ns.fxml",
        r#"<AnchorPane xmlns:s="urn:styles"><s:stylesheets/></AnchorPane>"#,
    );

    let outcome = validate_markup(&path);

    assert!(outcome
        .findings
        .iter()
        .any(|f| f.message == "Stylesheet reference found"));
}

#[test]
fn test_only_fx_namespace_ids_counted() {
    let fixture = FixtureDir::new();
    let path = fixture.write(
        "Ids.fxml",
        r#"<GridPane xmlns:fx="http://javafx.com/fxml/1" xmlns:o="urn:other">
             <Label id="plain"/>
             <Label o:id="other"/>
             <Label fx:id="real"/>
             <Label fx:id=""/>
             <Label fx:id=""/>
           </GridPane>"#,
    );

    let outcome = validate_markup(&path);

    assert!(outcome.is_pass());
    assert!(matches!(
        outcome.stats,
        Some(FileStats::Markup { identifiers: 1, .. })
    ));
}

#[test]
fn test_same_id_outside_fx_namespace_is_not_duplicate() {
    let fixture = FixtureDir::new();
    let path = fixture.write(
        "Mixed.fxml",
        r#"<VBox xmlns:fx="http://javafx.com/fxml/1">
             <Label id="save"/><Button fx:id="save"/>
           </VBox>"#,
    );

    assert!(validate_markup(&path).is_pass());
}

#[test]
fn test_doctype_is_accepted() {
    let fixture = FixtureDir::new();
    let path = fixture.write(
        "Doctype.fxml",
        r#"<?xml version="1.0"?>
<!DOCTYPE VBox>
<VBox xmlns:fx="http://javafx.com/fxml/1"><Label fx:id="a"/></VBox>"#,
    );

    assert!(validate_markup(&path).is_pass());
}

#[test]
fn test_invalid_byte_is_parse_error() {
    let fixture = FixtureDir::new();
    let path = fixture.write("Broken.fxml", [0x3c, 0x56, 0x42, 0x6f, 0x78, 0xe9, 0x2f, 0x3e]);

    let outcome = validate_markup(&path);

    assert!(matches!(outcome.error, Some(FxmlCheckError::Parse { .. })));
    assert_eq!(
        outcome.findings[0].message,
        "XML parsing failed - invalid UTF-8 byte at 1:6"
    );
}

#[test]
fn test_declared_latin1_markup_is_valid() {
    let fixture = FixtureDir::new();
    let contents: &[u8] = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>
<VBox xmlns:fx=\"http://javafx.com/fxml/1\">
  <Label fx:id=\"caf\xe9Label\" text=\"Men\xfc\"/>
  <stylesheets/>
</VBox>";
    let path = fixture.write("Latin1.fxml", contents);

    let outcome = validate_markup(&path);

    assert!(outcome.is_pass());
    assert!(messages(&outcome.findings, Severity::Ok).contains(&"Valid XML structure"));
    assert!(messages(&outcome.findings, Severity::Ok).contains(&"Found 1 unique fx:id attributes"));
}

#[test]
fn test_unreadable_path_is_generic_failure() {
    let fixture = FixtureDir::new();

    // A directory exists but cannot be read as a file
    let outcome = validate_markup(fixture.path());

    assert!(matches!(outcome.error, Some(FxmlCheckError::Unexpected { .. })));
}
