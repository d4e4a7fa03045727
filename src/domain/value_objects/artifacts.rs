//! Artifact Paths
//!
//! Deterministic names of the files a run produces, derived from the
//! normalized target.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::NormalizedPath;

/// Extension appended to the base name for the intermediate archive
pub const ARCHIVE_SUFFIX: &str = ".tar";

/// Extension appended to the base name for the compressed artifact
pub const COMPRESSED_SUFFIX: &str = ".tar.lz4";

/// Paths of the intermediate archive and the compressed artifact.
///
/// Both live next to the target, in its parent directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    archive: PathBuf,
    compressed: PathBuf,
}

impl ArtifactPaths {
    pub fn for_target(target: &NormalizedPath) -> Self {
        Self {
            archive: target.sibling_with_suffix(ARCHIVE_SUFFIX),
            compressed: target.sibling_with_suffix(COMPRESSED_SUFFIX),
        }
    }

    /// `<parent>/<base>.tar`
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// `<parent>/<base>.tar.lz4`
    pub fn compressed(&self) -> &Path {
        &self.compressed
    }

    /// Archive file name relative to the parent directory (`<base>.tar`)
    pub fn archive_file_name(&self) -> OsString {
        self.archive
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default()
    }
}
