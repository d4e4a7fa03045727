//! Pipeline Event Port
//!
//! Provides an observable interface for a compression run.
//! Enables console output, JSON event streams, and testing.

use std::path::PathBuf;

use crate::domain::value_objects::{Stage, StageOutcome};

/// Event emitted while the pipeline runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Run started
    Started {
        directory: PathBuf,
        archive: PathBuf,
        compressed: PathBuf,
    },

    /// A stage is about to launch its tool
    StageStarted { stage: Stage, command: String },

    /// A stage's tool succeeded
    StageSucceeded { stage: Stage },

    /// A stage's tool failed or could not run
    StageFailed {
        stage: Stage,
        program: String,
        outcome: StageOutcome,
    },

    /// A partial artifact was deleted after a failed stage
    PartialRemoved { path: PathBuf },

    /// A partial artifact could not be deleted
    CleanupFailed { path: PathBuf, error: String },

    /// An artifact was deliberately left in place after a failure
    ArtifactKept { path: PathBuf },

    /// Waiting for the go-ahead to remove the originals
    AwaitingConfirmation,

    /// The user did not confirm removal
    RemovalDeclined {
        directory: PathBuf,
        archive: PathBuf,
        compressed: PathBuf,
    },

    /// Originals removed
    Removed {
        directory: PathBuf,
        archive: PathBuf,
    },

    /// Removal failed; these paths need manual attention
    ManualCleanupRequired { paths: Vec<PathBuf> },

    /// Run finished (successfully or not)
    Completed {
        success: bool,
        compressed: Option<PathBuf>,
    },
}

/// Trait for receiving pipeline events
///
/// Implementations:
/// - ConsoleEventSink: human-readable terminal output
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait PipelineEventSink {
    /// Handle a pipeline event
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}
