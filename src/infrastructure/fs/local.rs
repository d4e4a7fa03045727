//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::path::Path;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // `symlink_metadata` so a dangling symlink still counts as occupied
        std::fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    /// A trailing separator makes the OS follow the link, so pass the
    /// path without one.
    fn is_symlink(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn exists_and_is_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let fs = LocalFs::new();
        assert!(fs.exists(dir.path()));
        assert!(fs.is_dir(dir.path()));
        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));
        assert!(!fs.exists(&dir.path().join("missing")));
        assert!(!fs.is_dir(&dir.path().join("missing")));
    }

    #[test]
    fn is_dir_accepts_trailing_separator() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let with_slash = format!("{}/", dir.path().join("data").display());
        assert!(LocalFs::new().is_dir(Path::new(&with_slash)));
    }

    #[test]
    fn remove_file_reports_not_found() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new()
            .remove_file(&dir.path().join("nope.tar"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn remove_file_deletes() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("partial.tar");
        std::fs::write(&file, "partial").unwrap();

        LocalFs::new().remove_file(&file).unwrap();
        assert!(!file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_existing() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("data.tar");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();
        assert!(LocalFs::new().exists(&link));
    }

    #[cfg(unix)]
    #[test]
    fn is_symlink_does_not_follow_link() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("real")).unwrap();
        let link = dir.path().join("data");
        std::os::unix::fs::symlink(dir.path().join("real"), &link).unwrap();

        let fs = LocalFs::new();
        assert!(fs.is_symlink(&link));
        assert!(fs.is_dir(&link));
        assert!(!fs.is_symlink(&dir.path().join("real")));
        assert!(!fs.is_symlink(&dir.path().join("missing")));
    }
}
