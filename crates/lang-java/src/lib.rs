//! Java classpath collaborators for the package scanner.
//!
//! [`Classpath`] answers resource lookups the way the JVM application class
//! loader does (`file:<jar>!/<path>` for archives, plain paths for class
//! directories) and [`ClasspathClassLoader`] turns a discovered name into a
//! parsed class handle.

pub mod classpath;
pub mod loader;

pub use classpath::Classpath;
pub use loader::ClasspathClassLoader;

use pkgscope_core::Scanner;
use std::sync::Arc;

/// Scanner wired to `classpath` for both lookup and class loading
pub fn java_scanner(classpath: Classpath) -> Scanner {
    let classpath = Arc::new(classpath);
    Scanner::new(classpath.clone())
        .with_class_loader(Arc::new(ClasspathClassLoader::new(classpath)))
}
