use crate::location::Location;

/// Hook invoked by the scanner at well-defined points of a scan.
///
/// Every method has an empty default so implementors only pick the events
/// they care about.
pub trait ScanObserver: Send + Sync {
    /// A namespace root is about to be resolved
    fn on_resolve(&self, _root: &str) {}

    /// A namespace root was resolved and classified
    fn on_classified(&self, _root: &str, _location: &Location) {}

    /// A leaf resource was appended to the result list
    fn on_discovered(&self, _name: &str) {}

    /// A top-level scan finished successfully
    fn on_complete(&self, _root: &str, _total: usize) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
