//! Temporary layout directories with sample FXML and CSS files.

use fxml_check::{FileKind, FileTarget, FxmlCheckConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Well-formed dialog with three `fx:id`s and a stylesheet link
pub const VALID_FXML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?import javafx.scene.control.Button?>
<?import javafx.scene.control.Label?>
<?import javafx.scene.layout.BorderPane?>
<BorderPane xmlns="http://javafx.com/javafx/17" xmlns:fx="http://javafx.com/fxml/1">
    <stylesheets>
        <URL value="@Dialog.css"/>
    </stylesheets>
    <top>
        <Label fx:id="titleLabel" text="Title"/>
    </top>
    <bottom>
        <Button fx:id="okButton" text="OK"/>
        <Button fx:id="cancelButton" text="Cancel"/>
    </bottom>
</BorderPane>
"#;

/// Stylesheet with three rules and all four known properties
pub const VALID_CSS: &str = r#".root {
    -fx-background-color: white;
    -fx-padding: 8;
}
.label {
    -fx-text-fill: black;
}
.button {
    -fx-border-color: gray;
}
"#;

/// Markup that reuses `okButton`
pub const DUPLICATE_ID_FXML: &str = r#"<VBox xmlns:fx="http://javafx.com/fxml/1">
    <Button fx:id="okButton"/>
    <Button fx:id="okButton"/>
</VBox>
"#;

/// Markup with an unclosed element
pub const MALFORMED_FXML: &str = r#"<VBox xmlns:fx="http://javafx.com/fxml/1">
    <Label fx:id="titleLabel">
</VBox>
"#;

pub const FOOD_DIR: &str = "resources/gui/dialogs/features/food";

pub const FOOD_FILES: [&str; 4] = [
    "FoodPostDetailsDialog.fxml",
    "FoodPostDetailsDialog.css",
    "FoodPostDialog.fxml",
    "FoodPostDialog.css",
];

/// A temporary directory that is deleted on drop
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        FixtureDir {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the fixture root, creating parent directories
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dirs");
        }
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Lay out the four food dialog files under the default relative directory
    pub fn with_food_dialogs() -> Self {
        let fixture = FixtureDir::new();
        for name in FOOD_FILES {
            let contents = match FileKind::from_file_name(name) {
                Some(FileKind::Markup) => VALID_FXML,
                _ => VALID_CSS,
            };
            fixture.write(&format!("{}/{}", FOOD_DIR, name), contents);
        }
        fixture
    }

    pub fn food_dir(&self) -> PathBuf {
        self.dir.path().join(FOOD_DIR)
    }

    /// Default targets, rooted in this fixture
    pub fn food_config(&self) -> FxmlCheckConfig {
        FxmlCheckConfig {
            target_dir: self.food_dir(),
            ..FxmlCheckConfig::default()
        }
    }

    /// Config for explicit targets directly under the fixture root
    pub fn config_for(&self, targets: &[(&str, FileKind)]) -> FxmlCheckConfig {
        FxmlCheckConfig {
            target_dir: self.path().to_path_buf(),
            targets: targets
                .iter()
                .map(|(name, kind)| FileTarget::new(*name, *kind))
                .collect(),
            fail_fast: false,
        }
    }
}
