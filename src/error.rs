//! Error types for dirpress
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Stage;

/// Result type alias for dirpress operations
pub type DirpressResult<T> = Result<T, DirpressError>;

/// Main error type for dirpress operations
#[derive(Error, Debug)]
pub enum DirpressError {
    /// Target path does not exist
    #[error("directory '{path}' not found or not a valid directory")]
    DirectoryNotFound { path: PathBuf },

    /// Target path exists but is not a directory
    #[error("'{path}' not found or not a valid directory")]
    NotADirectory { path: PathBuf },

    /// Target is a symbolic link; archiving it would store only the link
    #[error("'{path}' is a symbolic link - pass the directory it points to")]
    SymlinkTarget { path: PathBuf },

    /// Target has no usable final component (`/`, `.`, `..`)
    #[error("cannot derive an archive name from '{path}' - pass the directory by name")]
    NoBaseName { path: PathBuf },

    /// An artifact this run would create is already on disk
    #[error("'{path}' already exists - move it away before compressing")]
    ArtifactExists { path: PathBuf },

    /// A pipeline stage did not succeed
    #[error("{stage} stage failed: {detail}")]
    StageFailed { stage: Stage, detail: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
