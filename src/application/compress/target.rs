//! Target validation
//!
//! Turns the raw command-line argument into a checked target with its
//! normalized form and artifact paths, computed once for the whole run.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{ArtifactPaths, NormalizedPath};
use crate::error::{DirpressError, DirpressResult};

/// A directory that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressTarget {
    original: PathBuf,
    normalized: NormalizedPath,
    artifacts: ArtifactPaths,
}

impl CompressTarget {
    /// Validate `path`: it must exist, be a directory, end in a real name,
    /// and not be a symbolic link.
    pub fn resolve<FS: FileSystem>(path: &Path, fs: &FS) -> DirpressResult<Self> {
        if !fs.is_dir(path) {
            return Err(if fs.exists(path) {
                DirpressError::NotADirectory {
                    path: path.to_path_buf(),
                }
            } else {
                DirpressError::DirectoryNotFound {
                    path: path.to_path_buf(),
                }
            });
        }

        let normalized = NormalizedPath::new(path);
        if !normalized.is_archivable() {
            return Err(DirpressError::NoBaseName {
                path: path.to_path_buf(),
            });
        }

        // tar would store only the link, while `rm -rf link/` empties the
        // directory it points to.
        if fs.is_symlink(&normalized.joined()) {
            return Err(DirpressError::SymlinkTarget {
                path: path.to_path_buf(),
            });
        }

        let artifacts = ArtifactPaths::for_target(&normalized);
        Ok(Self {
            original: path.to_path_buf(),
            normalized,
            artifacts,
        })
    }

    /// The path exactly as the user gave it
    pub fn original(&self) -> &Path {
        &self.original
    }

    pub fn normalized(&self) -> &NormalizedPath {
        &self.normalized
    }

    pub fn artifacts(&self) -> &ArtifactPaths {
        &self.artifacts
    }
}
