use crate::codec::TrimMode;
use pkgscope_api::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables of a scan. Defaults match the Java class-file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Suffix of a leaf resource, including the dot
    pub leaf_extension: String,
    /// Suffixes classifying a physical path as an archive
    pub archive_extensions: Vec<String>,
    pub trim_mode: TrimMode,
    /// Only match archive entries on a path-separator boundary of the prefix
    pub align_archive_prefix: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            leaf_extension: ".class".to_string(),
            archive_extensions: vec![".jar".to_string()],
            trim_mode: TrimMode::default(),
            align_archive_prefix: true,
        }
    }
}

impl ScanOptions {
    pub fn from_json_str(json: &str) -> ScanResult<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| ScanError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: &Path) -> ScanResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
        Self::from_json_str(&content)
    }

    pub fn is_leaf(&self, name: &str) -> bool {
        name.ends_with(&self.leaf_extension)
    }

    pub fn is_archive(&self, path: &str) -> bool {
        self.archive_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
    }

    fn validate(&self) -> ScanResult<()> {
        if self.leaf_extension.is_empty() {
            return Err(ScanError::Config("leaf_extension must not be empty".into()));
        }
        if self.archive_extensions.iter().any(|ext| ext.is_empty()) {
            return Err(ScanError::Config(
                "archive_extensions must not contain empty suffixes".into(),
            ));
        }
        Ok(())
    }
}
