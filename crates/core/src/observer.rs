use pkgscope_api::{Location, ScanObserver};
use tracing::{debug, info, trace};

/// Default observer: turns scan events into `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn on_resolve(&self, root: &str) {
        debug!("Scanning package {}", root);
    }

    fn on_classified(&self, root: &str, location: &Location) {
        debug!(
            "Package {} is backed by {} {}",
            root,
            location.kind.as_str(),
            location.path.display()
        );
    }

    fn on_discovered(&self, name: &str) {
        trace!("Found {}", name);
    }

    fn on_complete(&self, root: &str, total: usize) {
        info!("Package scan of {} complete: {} classes", root, total);
    }
}
