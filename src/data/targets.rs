//! Built-in validation targets
//!
//! The food feature dialogs and the advisory tables used by the validators.

use crate::{FileKind, FileTarget};

/// Directory checked when no other is configured, relative to the working directory
pub const DEFAULT_TARGET_DIR: &str = "resources/gui/dialogs/features/food";

/// Namespace URI bound to the `fx` prefix in FXML documents
pub const FXML_NAMESPACE: &str = "http://javafx.com/fxml/1";

/// Local name of the identifier attribute in [`FXML_NAMESPACE`]
pub const FXML_ID_ATTRIBUTE: &str = "id";

/// Local name of the element that links stylesheets to a layout
pub const STYLESHEETS_ELEMENT: &str = "stylesheets";

/// Root containers a dialog layout usually starts with
pub const CONTAINER_ROOTS: [&str; 6] = [
    "BorderPane",
    "GridPane",
    "VBox",
    "HBox",
    "AnchorPane",
    "StackPane",
];

/// JavaFX CSS properties a dialog stylesheet is expected to use
pub const KNOWN_FX_PROPERTIES: [&str; 4] = [
    "-fx-background-color",
    "-fx-text-fill",
    "-fx-padding",
    "-fx-border-color",
];

const DEFAULT_TARGETS: [(&str, FileKind); 4] = [
    ("FoodPostDetailsDialog.fxml", FileKind::Markup),
    ("FoodPostDetailsDialog.css", FileKind::Stylesheet),
    ("FoodPostDialog.fxml", FileKind::Markup),
    ("FoodPostDialog.css", FileKind::Stylesheet),
];

/// Files validated when no manifest is given, in validation order
pub fn default_targets() -> Vec<FileTarget> {
    DEFAULT_TARGETS
        .iter()
        .map(|(name, kind)| FileTarget::new(*name, *kind))
        .collect()
}

/// Check if a root tag is one of the usual layout containers
pub fn is_container_root(tag: &str) -> bool {
    CONTAINER_ROOTS.contains(&tag)
}
