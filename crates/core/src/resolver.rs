use crate::codec::{extract_physical_path, to_path_form};
use crate::config::ScanOptions;
use pkgscope_api::{Location, LocationKind, ResourceLookup, ScanError, ScanResult};
use tracing::trace;

/// Maps a namespace root to its physical backing store
pub struct LocationResolver<'a> {
    lookup: &'a dyn ResourceLookup,
    options: &'a ScanOptions,
}

impl<'a> LocationResolver<'a> {
    pub fn new(lookup: &'a dyn ResourceLookup, options: &'a ScanOptions) -> Self {
        Self { lookup, options }
    }

    pub fn resolve(&self, root: &str) -> ScanResult<Location> {
        let path_form = to_path_form(root);
        let descriptor = self
            .lookup
            .locate(&path_form)
            .ok_or_else(|| ScanError::ResourceNotFound(root.to_string()))?;
        trace!("Lookup for {} returned {}", path_form, descriptor);

        let physical = extract_physical_path(&descriptor)?;
        let kind = if self.options.is_archive(physical) {
            LocationKind::Archive
        } else {
            LocationKind::Directory
        };

        Ok(Location::new(physical, kind))
    }
}
