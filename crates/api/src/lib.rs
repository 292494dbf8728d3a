//! Shared types and capability traits for package scanning.
//!
//! The scanner in `pkgscope-core` only depends on the traits defined here;
//! concrete lookups and class loaders live in the language crates.

pub mod error;
pub mod loader;
pub mod location;
pub mod lookup;
pub mod observer;

pub use error::{ScanError, ScanResult};
pub use loader::{ClassHandle, ClassKind, ClassLoader};
pub use location::{Location, LocationKind};
pub use lookup::ResourceLookup;
pub use observer::{NoopObserver, ScanObserver};
