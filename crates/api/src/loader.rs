use crate::error::ScanResult;
use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// A discovered name resolved to something the embedding system can load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHandle {
    /// Fully qualified dotted name
    pub name: String,
    pub kind: ClassKind,
    /// Archive or directory the class bytes were read from
    pub origin: PathBuf,
}

/// Load-by-name capability provided by the embedding system.
///
/// `hint` is the location of the scanner's base root; loaders backed by an
/// archive should search that archive first.
pub trait ClassLoader: Send + Sync {
    fn load_class(&self, name: &str, hint: Option<&Location>) -> ScanResult<ClassHandle>;
}
