//! Name-format translation between dotted namespace form (`com.acme.Foo`)
//! and path form (`com/acme/Foo.class`).

use pkgscope_api::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};

pub const NAMESPACE_SEPARATOR: char = '.';
pub const PATH_SEPARATOR: char = '/';

/// Delimits the container path from the internal entry path in an
/// archive-backed descriptor (`file:/libs/app.jar!/com/acme`)
pub const ARCHIVE_ENTRY_DELIMITER: char = '!';

/// Length of the `file:` scheme prefix stripped from archive descriptors
pub const SCHEME_PREFIX_LEN: usize = 5;

/// Where a trailing extension starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMode {
    /// Cut at the first `.` of the whole name
    FirstDot,
    /// Cut at the last `.` of the final path segment
    #[default]
    LastDot,
}

pub fn to_path_form(dotted: &str) -> String {
    dotted.replace(NAMESPACE_SEPARATOR, "/")
}

/// Trims the extension (first-dot semantics) and turns separators into dots.
pub fn to_dotted_form(path: &str) -> String {
    to_dotted_form_with(path, TrimMode::FirstDot)
}

pub fn to_dotted_form_with(path: &str, mode: TrimMode) -> String {
    trim_with(path, mode).replace(PATH_SEPARATOR, ".")
}

pub fn trim_with(name: &str, mode: TrimMode) -> &str {
    match mode {
        TrimMode::FirstDot => trim_extension(name),
        TrimMode::LastDot => trim_last_extension(name),
    }
}

/// Returns everything before the first `.`, or the input when there is none.
///
/// `Foo.class` -> `Foo`, but also `Foo.v2.class` -> `Foo`.
pub fn trim_extension(name: &str) -> &str {
    match name.find(NAMESPACE_SEPARATOR) {
        Some(pos) => &name[..pos],
        None => name,
    }
}

/// Like [`trim_extension`] but cuts at the last `.` of the final segment, so
/// dots in parent directories or inside the file stem survive.
pub fn trim_last_extension(name: &str) -> &str {
    let segment_start = name.rfind(PATH_SEPARATOR).map_or(0, |pos| pos + 1);
    match name[segment_start..].rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => &name[..segment_start + pos],
        None => name,
    }
}

/// Extracts the physical container path from a location descriptor.
///
/// Without the `!` delimiter the descriptor already is the path. With it, the
/// text between the scheme prefix and the delimiter is returned.
///
/// Any `!` counts as the delimiter, so a plain directory path containing one
/// is read as an archive descriptor and loses its first five characters.
pub fn extract_physical_path(descriptor: &str) -> ScanResult<&str> {
    let Some(pos) = descriptor.find(ARCHIVE_ENTRY_DELIMITER) else {
        return Ok(descriptor);
    };

    match descriptor.get(SCHEME_PREFIX_LEN..pos) {
        Some(path) if !path.is_empty() => Ok(path),
        _ => Err(ScanError::MalformedLocation(descriptor.to_string())),
    }
}
