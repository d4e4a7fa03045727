//! dirpress - archive, compress and clean up a directory
//!
//! Packs a directory with `tar`, compresses the archive with `lz4`, and only
//! after an interactive confirmation removes the original directory and the
//! intermediate archive. Each stage runs only if the previous one succeeded.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompressOptions, CompressReport, CompressTarget, CompressUseCase};
pub use domain::value_objects::{ArtifactPaths, NormalizedPath, Stage, StageOutcome};
pub use error::{DirpressError, DirpressResult};
