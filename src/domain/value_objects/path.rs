//! Normalized Path Value Object
//!
//! Splits a target directory into `(parent, base_name)` after stripping
//! trailing separators, so external tools only ever see a parent directory
//! to work in and a separator-free member name.
//!
//! Naive splitting of `data/` yields an empty base name, which turns
//! `rm -rf <parent>/<base>` into `rm -rf <parent>/`.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A target path split into parent directory and base name.
///
/// Invariants:
/// - `base_name` holds a single component and no separator
/// - `parent.join(base_name)` is the target with trailing separators removed
/// - `parent` is `.` when the target has no parent component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    parent: PathBuf,
    base_name: OsString,
    archivable: bool,
}

impl NormalizedPath {
    /// Normalize a target path.
    ///
    /// Works on an owned copy; the caller's value is never touched.
    pub fn new<P: AsRef<Path>>(target: P) -> Self {
        // `components()` drops trailing separators, repeated separators and
        // non-leading `.` entries.
        let mut components: Vec<Component<'_>> = target.as_ref().components().collect();

        let (base_name, archivable) = match components.pop() {
            // `data/.` collapses to `data`, but tools given the raw string
            // still see `.` as its last entry.
            Some(Component::Normal(name)) if ends_in_current_dir(target.as_ref()) => {
                (name.to_os_string(), false)
            }
            Some(Component::Normal(name)) => (name.to_os_string(), true),
            Some(other) => (other.as_os_str().to_os_string(), false),
            None => (OsString::new(), false),
        };

        let parent: PathBuf = components.iter().collect();
        let parent = if parent.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            parent
        };

        Self {
            parent,
            base_name,
            archivable,
        }
    }

    /// Directory the target lives in
    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// Final component of the target
    pub fn base_name(&self) -> &OsStr {
        &self.base_name
    }

    /// Whether the final component is a real name.
    ///
    /// False for `/`, `.`, `..` and the empty path. Such targets cannot be
    /// archived by name and must never reach the removal stage.
    pub fn is_archivable(&self) -> bool {
        self.archivable
    }

    /// `parent/base_name`
    pub fn joined(&self) -> PathBuf {
        self.parent.join(&self.base_name)
    }

    /// Sibling of the target named `<base_name><suffix>`
    pub fn sibling_with_suffix(&self, suffix: &str) -> PathBuf {
        let mut name = self.base_name.clone();
        name.push(suffix);
        self.parent.join(name)
    }
}

/// Whether the last raw entry of `path`, ignoring trailing separators, is `.`
fn ends_in_current_dir(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    let end = bytes
        .iter()
        .rposition(|&b| !std::path::is_separator(b as char))
        .map_or(0, |i| i + 1);
    let trimmed = &bytes[..end];

    trimmed.ends_with(b".")
        && (trimmed.len() == 1 || std::path::is_separator(trimmed[trimmed.len() - 2] as char))
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined().display())
    }
}
