//! Java classpath acting as the resource lookup of a scan.

use pkgscope_api::ResourceLookup;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::warn;
use zip::ZipArchive;

/// Ordered list of class directories and jar files.
///
/// The first entry that contains a package wins, as with the JVM's
/// application class loader.
#[derive(Debug, Clone, Default)]
pub struct Classpath {
    entries: Vec<PathBuf>,
}

impl Classpath {
    pub fn new(entries: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Splits a platform path list (`a.jar:classes` on Unix)
    pub fn parse(list: impl AsRef<OsStr>) -> Self {
        Self::new(std::env::split_paths(list.as_ref()).filter(|p| !p.as_os_str().is_empty()))
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn push(&mut self, entry: impl Into<PathBuf>) {
        self.entries.push(entry.into());
    }

    fn locate_in_archive(jar: &Path, path_form: &str) -> Option<String> {
        let file = match File::open(jar) {
            Ok(file) => file,
            Err(e) => {
                warn!("Cannot open classpath archive {}: {}", jar.display(), e);
                return None;
            }
        };
        let archive = match ZipArchive::new(BufReader::new(file)) {
            Ok(archive) => archive,
            Err(e) => {
                warn!("Cannot read classpath archive {}: {}", jar.display(), e);
                return None;
            }
        };

        let package_dir = format!("{}/", path_form);
        let found = path_form.is_empty()
            || archive
                .file_names()
                .any(|name| name == path_form || name.starts_with(package_dir.as_str()));

        found.then(|| format!("file:{}!/{}", jar.display(), path_form))
    }
}

impl ResourceLookup for Classpath {
    fn locate(&self, path_form: &str) -> Option<String> {
        self.entries.iter().find_map(|entry| {
            if entry.is_dir() {
                let candidate = entry.join(path_form);
                candidate
                    .exists()
                    .then(|| candidate.to_string_lossy().into_owned())
            } else if entry.is_file() {
                Self::locate_in_archive(entry, path_form)
            } else {
                None
            }
        })
    }
}
