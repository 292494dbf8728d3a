use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Physical backing store kind of a namespace root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    /// Zip-based archive (jar)
    Archive,
    /// Plain directory tree
    Directory,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Archive => "archive",
            LocationKind::Directory => "directory",
        }
    }
}

/// Resolved backing store of one namespace root.
///
/// Created fresh by every resolution; never cached across recursion steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub kind: LocationKind,
}

impl Location {
    pub fn new(path: impl Into<PathBuf>, kind: LocationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn archive(path: impl Into<PathBuf>) -> Self {
        Self::new(path, LocationKind::Archive)
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path, LocationKind::Directory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_archive(&self) -> bool {
        self.kind == LocationKind::Archive
    }
}
