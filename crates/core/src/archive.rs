use crate::codec::PATH_SEPARATOR;
use pkgscope_api::{ScanError, ScanResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// Lists leaf resources stored in a zip archive.
///
/// Archives have a flat entry namespace, so one pass with a prefix filter
/// already captures every nested leaf; callers never recurse into archives.
pub struct ArchiveReader<'a> {
    leaf_extension: &'a str,
    align_prefix: bool,
}

impl<'a> ArchiveReader<'a> {
    pub fn new(leaf_extension: &'a str, align_prefix: bool) -> Self {
        Self {
            leaf_extension,
            align_prefix,
        }
    }

    /// Returns the verbatim internal path of every leaf entry under `prefix`,
    /// in the archive's own entry order.
    ///
    /// The archive handle is dropped before returning on every path.
    pub fn list_leaves_under_prefix(
        &self,
        archive_path: &Path,
        prefix: &str,
    ) -> ScanResult<Vec<String>> {
        debug!("Reading classes from archive {}", archive_path.display());

        let file = File::open(archive_path).map_err(|e| ScanError::io(archive_path, e))?;
        let mut archive = ZipArchive::new(BufReader::new(file))
            .map_err(|e| ScanError::io(archive_path, std::io::Error::other(e)))?;

        let prefix = self.effective_prefix(prefix);
        let mut names = Vec::new();

        for i in 0..archive.len() {
            let entry = archive
                .by_index(i)
                .map_err(|e| ScanError::io(archive_path, std::io::Error::other(e)))?;
            let name = entry.name();

            if name.starts_with(prefix.as_str()) && name.ends_with(self.leaf_extension) {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    fn effective_prefix(&self, prefix: &str) -> String {
        if self.align_prefix && !prefix.is_empty() && !prefix.ends_with(PATH_SEPARATOR) {
            format!("{}{}", prefix, PATH_SEPARATOR)
        } else {
            prefix.to_string()
        }
    }
}
