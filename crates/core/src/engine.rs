//! Recursive package scanner.
//!
//! A scan resolves the namespace root, then branches on the backing store:
//! - Archive: one prefix listing captures every nested class, no recursion
//! - Directory: one level is listed; class files are collected and
//!   sub-directories are scanned again as sub-packages, re-resolving each one
//!
//! Names are appended in discovery order. Directory listing order is whatever
//! the platform returns and must not be relied upon.

use crate::archive::ArchiveReader;
use crate::codec::{to_dotted_form_with, to_path_form, trim_with};
use crate::config::ScanOptions;
use crate::directory;
use crate::observer::TracingObserver;
use crate::resolver::LocationResolver;
use pkgscope_api::{
    ClassHandle, ClassLoader, Location, LocationKind, ResourceLookup, ScanError, ScanObserver,
    ScanResult,
};
use std::sync::Arc;
use tracing::{debug, trace};

pub struct Scanner {
    lookup: Arc<dyn ResourceLookup>,
    observer: Arc<dyn ScanObserver>,
    class_loader: Option<Arc<dyn ClassLoader>>,
    options: ScanOptions,
}

impl Scanner {
    pub fn new(lookup: Arc<dyn ResourceLookup>) -> Self {
        Self {
            lookup,
            observer: Arc::new(TracingObserver),
            class_loader: None,
            options: ScanOptions::default(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_class_loader(mut self, loader: Arc<dyn ClassLoader>) -> Self {
        self.class_loader = Some(loader);
        self
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the fully qualified name of every class reachable under `root`.
    ///
    /// Any lookup or I/O failure aborts the whole scan; a partial list is
    /// never returned.
    pub fn scan(&self, root: &str) -> ScanResult<Vec<String>> {
        let start = std::time::Instant::now();
        let mut names = Vec::new();

        self.do_scan(root, &mut names)?;

        debug!("Scanned {} in {:?}", root, start.elapsed());
        self.observer.on_complete(root, names.len());
        Ok(names)
    }

    /// Resolves `root` to its backing store without scanning it
    pub fn resolve(&self, root: &str) -> ScanResult<Location> {
        LocationResolver::new(self.lookup.as_ref(), &self.options).resolve(root)
    }

    /// Resolves one discovered name to a loadable handle.
    ///
    /// The location of `base_root` is passed to the class loader as a hint.
    pub fn load_class(&self, base_root: &str, name: &str) -> ScanResult<ClassHandle> {
        let loader = self.class_loader.as_ref().ok_or(ScanError::NoClassLoader)?;
        let location = self.resolve(base_root)?;
        loader.load_class(name, Some(&location))
    }

    fn do_scan(&self, root: &str, names: &mut Vec<String>) -> ScanResult<()> {
        self.observer.on_resolve(root);
        let location = self.resolve(root)?;
        self.observer.on_classified(root, &location);

        match location.kind {
            LocationKind::Archive => self.scan_archive(root, &location, names),
            LocationKind::Directory => self.scan_directory(root, &location, names),
        }
    }

    fn scan_archive(
        &self,
        root: &str,
        location: &Location,
        names: &mut Vec<String>,
    ) -> ScanResult<()> {
        let reader = ArchiveReader::new(
            &self.options.leaf_extension,
            self.options.align_archive_prefix,
        );

        for entry in reader.list_leaves_under_prefix(location.path(), &to_path_form(root))? {
            self.discovered(names, to_dotted_form_with(&entry, self.options.trim_mode));
        }
        Ok(())
    }

    fn scan_directory(
        &self,
        root: &str,
        location: &Location,
        names: &mut Vec<String>,
    ) -> ScanResult<()> {
        let Some(children) = directory::list_children(location.path())? else {
            debug!("No directory behind {}, skipping", root);
            return Ok(());
        };

        for child in children {
            if child.is_dir {
                self.do_scan(&qualify(root, &child.name), names)?;
            } else if self.options.is_leaf(&child.name) {
                let short_name = trim_with(&child.name, self.options.trim_mode);
                self.discovered(names, qualify(root, short_name));
            } else {
                trace!("Ignoring {} in {}", child.name, root);
            }
        }
        Ok(())
    }

    fn discovered(&self, names: &mut Vec<String>, name: String) {
        self.observer.on_discovered(&name);
        names.push(name);
    }
}

fn qualify(root: &str, name: &str) -> String {
    if root.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", root, name)
    }
}
