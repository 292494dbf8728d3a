use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Resource not found for namespace root: {0}")]
    ResourceNotFound(String),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed location descriptor: {0}")]
    MalformedLocation(String),
    #[error("Class not found: {0}")]
    ClassNotFound(String),
    #[error("Invalid class file for {name}: {reason}")]
    InvalidClass { name: String, reason: String },
    #[error("No class loader configured")]
    NoClassLoader,
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
