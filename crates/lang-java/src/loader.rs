use crate::classpath::Classpath;
use pkgscope_api::{ClassHandle, ClassKind, ClassLoader, Location, ScanError, ScanResult};
use pkgscope_core::codec::to_path_form;
use ristretto_classfile::{ClassAccessFlags, ClassFile};
use std::fs::File;
use std::io::{BufReader, Cursor, ErrorKind, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

/// Loads class files from a [`Classpath`].
///
/// An archive hint is searched before the classpath, mirroring a class
/// loader created for the jar that backs the scanned package.
pub struct ClasspathClassLoader {
    classpath: Arc<Classpath>,
}

impl ClasspathClassLoader {
    pub fn new(classpath: Arc<Classpath>) -> Self {
        Self { classpath }
    }

    fn find_bytes(
        &self,
        entry_name: &str,
        hint: Option<&Location>,
    ) -> ScanResult<Option<(Vec<u8>, std::path::PathBuf)>> {
        if let Some(location) = hint.filter(|l| l.is_archive()) {
            if let Some(bytes) = read_from_archive(location.path(), entry_name)? {
                return Ok(Some((bytes, location.path.clone())));
            }
        }

        for entry in self.classpath.entries() {
            let bytes = if entry.is_dir() {
                read_from_directory(entry, entry_name)?
            } else if entry.is_file() {
                read_from_archive(entry, entry_name)?
            } else {
                None
            };
            if let Some(bytes) = bytes {
                return Ok(Some((bytes, entry.clone())));
            }
        }
        Ok(None)
    }
}

impl ClassLoader for ClasspathClassLoader {
    fn load_class(&self, name: &str, hint: Option<&Location>) -> ScanResult<ClassHandle> {
        let entry_name = format!("{}.class", to_path_form(name));
        let (bytes, origin) = self
            .find_bytes(&entry_name, hint)?
            .ok_or_else(|| ScanError::ClassNotFound(name.to_string()))?;
        debug!("Loading {} from {}", name, origin.display());

        let kind = parse_kind(name, bytes)?;
        Ok(ClassHandle {
            name: name.to_string(),
            kind,
            origin,
        })
    }
}

fn read_from_directory(dir: &Path, entry_name: &str) -> ScanResult<Option<Vec<u8>>> {
    let path = dir.join(entry_name);
    match std::fs::read(&path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ScanError::io(path, e)),
    }
}

fn read_from_archive(jar: &Path, entry_name: &str) -> ScanResult<Option<Vec<u8>>> {
    let file = File::open(jar).map_err(|e| ScanError::io(jar, e))?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| ScanError::io(jar, std::io::Error::other(e)))?;

    let mut entry = match archive.by_name(entry_name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(ScanError::io(jar, std::io::Error::other(e))),
    };

    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| ScanError::io(jar, e))?;
    Ok(Some(bytes))
}

fn parse_kind(name: &str, bytes: Vec<u8>) -> ScanResult<ClassKind> {
    let class = ClassFile::from_bytes(&mut Cursor::new(bytes)).map_err(|e| {
        ScanError::InvalidClass {
            name: name.to_string(),
            reason: format!("{e:?}"),
        }
    })?;

    // Annotations also carry the interface flag
    let flags = class.access_flags;
    let kind = if flags.contains(ClassAccessFlags::ANNOTATION) {
        ClassKind::Annotation
    } else if flags.contains(ClassAccessFlags::INTERFACE) {
        ClassKind::Interface
    } else if flags.contains(ClassAccessFlags::ENUM) {
        ClassKind::Enum
    } else {
        ClassKind::Class
    };
    Ok(kind)
}
