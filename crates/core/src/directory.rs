use pkgscope_api::{ScanError, ScanResult};
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub name: String,
    pub is_dir: bool,
}

#[cfg(test)]
impl DirChild {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Lists the immediate children of `dir`, in the platform's listing order.
///
/// Returns `Ok(None)` when the path does not exist or is not a directory, so
/// callers can tell "no such directory" apart from "empty directory".
pub fn list_children(dir: &Path) -> ScanResult<Option<Vec<DirChild>>> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Ok(None),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ScanError::io(dir, e)),
    }

    let mut children = Vec::new();
    // follow_links so a symlinked package directory still counts as one
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            ScanError::io(path, source)
        })?;

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping non UTF-8 entry {}", entry.path().display());
            continue;
        };

        children.push(DirChild {
            name: name.to_string(),
            is_dir: entry.file_type().is_dir(),
        });
    }

    Ok(Some(children))
}
