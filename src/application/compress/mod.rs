//! Compress Use Case
//!
//! Orchestrates a single run over one directory.
//!
//! This module handles:
//! - Validating the target and deriving artifact paths
//! - Running tar, then lz4, each gated on the previous stage's success
//! - Cleaning up partial artifacts after a failed stage
//! - Asking for confirmation before removing the originals

mod options;
mod result;
mod target;
mod use_case;


pub use options::{CompressOptions, ToolSet};
pub use result::{CompressReport, PipelineOutcome, PipelineState};
pub use target::CompressTarget;
pub use use_case::CompressUseCase;
