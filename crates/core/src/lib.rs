//! Package scanner: finds every compiled class under a namespace root,
//! whether the root lives in a jar or in a directory tree.

pub mod archive;
pub mod codec;
pub mod config;
pub mod directory;
pub mod engine;
pub mod logging;
pub mod observer;
pub mod resolver;

pub use archive::ArchiveReader;
pub use codec::TrimMode;
pub use config::ScanOptions;
pub use directory::{DirChild, list_children};
pub use engine::Scanner;
pub use observer::TracingObserver;
pub use resolver::LocationResolver;

pub use pkgscope_api::{
    ClassHandle, ClassKind, ClassLoader, Location, LocationKind, NoopObserver, ResourceLookup,
    ScanError, ScanObserver, ScanResult,
};
