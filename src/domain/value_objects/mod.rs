//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifacts;
mod outcome;
mod path;

pub use artifacts::{ArtifactPaths, ARCHIVE_SUFFIX, COMPRESSED_SUFFIX};
pub use outcome::{ProcessFailure, Stage, StageOutcome};
pub use path::NormalizedPath;
