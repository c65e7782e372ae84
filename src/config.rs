//! TOML manifest describing what to validate.
//!
//! ```toml
//! target_dir = "resources/gui/dialogs/features/food"
//! fail_fast = false
//!
//! [[files]]
//! name = "FoodPostDialog.fxml"
//!
//! [[files]]
//! name = "theme.txt"
//! kind = "stylesheet"
//! ```
//!
//! Every key is optional. `kind` is inferred from the extension when absent.

use crate::{FileKind, FileTarget, FxmlCheckConfig, FxmlCheckError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub target_dir: Option<PathBuf>,
    pub fail_fast: Option<bool>,
    #[serde(default)]
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestFile {
    pub name: String,
    pub kind: Option<FileKind>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, FxmlCheckError> {
        let contents = fs::read_to_string(path).map_err(|e| FxmlCheckError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&contents, path)
    }

    /// Parse manifest text; `origin` is only used in error messages
    pub fn parse(contents: &str, origin: &Path) -> Result<Self, FxmlCheckError> {
        toml::from_str(contents).map_err(|e| FxmlCheckError::Config {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Merge onto the built-in defaults
    pub fn into_config(self, origin: &Path) -> Result<FxmlCheckConfig, FxmlCheckError> {
        let mut config = FxmlCheckConfig::default();

        if let Some(dir) = self.target_dir {
            config.target_dir = dir;
        }
        if let Some(fail_fast) = self.fail_fast {
            config.fail_fast = fail_fast;
        }

        if !self.files.is_empty() {
            config.targets = self
                .files
                .into_iter()
                .map(|file| file.into_target(origin))
                .collect::<Result<Vec<_>, _>>()?;
        }

        debug!(
            origin = %origin.display(),
            target_dir = %config.target_dir.display(),
            targets = config.targets.len(),
            "loaded manifest"
        );

        Ok(config)
    }
}

impl ManifestFile {
    fn into_target(self, origin: &Path) -> Result<FileTarget, FxmlCheckError> {
        let kind = match self.kind {
            Some(kind) => kind,
            None => FileKind::from_file_name(&self.name).ok_or_else(|| FxmlCheckError::Config {
                path: origin.to_path_buf(),
                message: format!(
                    "cannot infer kind of '{}'; set kind = \"markup\" or \"stylesheet\"",
                    self.name
                ),
            })?,
        };
        Ok(FileTarget::new(self.name, kind))
    }
}
