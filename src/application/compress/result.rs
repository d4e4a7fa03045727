//! Pipeline states and run results

use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::{Stage, StageOutcome};
use crate::error::DirpressError;

/// State of the compression pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Archiving,
    Compressing,
    AwaitingConfirmation,
    Removing,
    /// Finished; `removed` tells whether the originals are gone
    Done { removed: bool },
    /// A stage did not succeed; nothing further runs
    Aborted {
        stage: Stage,
        program: String,
        outcome: StageOutcome,
    },
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Archiving => write!(f, "archiving"),
            PipelineState::Compressing => write!(f, "compressing"),
            PipelineState::AwaitingConfirmation => write!(f, "awaiting confirmation"),
            PipelineState::Removing => write!(f, "removing"),
            PipelineState::Done { .. } => write!(f, "done"),
            PipelineState::Aborted { stage, .. } => write!(f, "aborted during {}", stage),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Originals removed; only the compressed artifact remains
    Completed,
    /// User kept the originals
    RemovalDeclined,
    /// A stage failed
    Aborted {
        stage: Stage,
        program: String,
        outcome: StageOutcome,
    },
}

impl PipelineOutcome {
    /// Map a terminal state onto the run outcome
    pub fn from_terminal(state: &PipelineState) -> Option<Self> {
        match state {
            PipelineState::Done { removed: true } => Some(PipelineOutcome::Completed),
            PipelineState::Done { removed: false } => Some(PipelineOutcome::RemovalDeclined),
            PipelineState::Aborted {
                stage,
                program,
                outcome,
            } => Some(PipelineOutcome::Aborted {
                stage: *stage,
                program: program.clone(),
                outcome: outcome.clone(),
            }),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, PipelineOutcome::Aborted { .. })
    }
}

/// Result of a compression run
#[derive(Debug, Clone)]
pub struct CompressReport {
    /// Terminal outcome
    pub outcome: PipelineOutcome,
    /// Every state the pipeline passed through, in order
    pub states: Vec<PipelineState>,
    /// The compressed artifact, if it exists after the run
    pub compressed: Option<PathBuf>,
}

impl CompressReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Turn an aborted run into an error for the caller
    pub fn into_result(self) -> Result<Self, DirpressError> {
        match &self.outcome {
            PipelineOutcome::Aborted {
                stage,
                program,
                outcome,
            } => Err(DirpressError::StageFailed {
                stage: *stage,
                detail: outcome.describe(program),
            }),
            PipelineOutcome::Completed | PipelineOutcome::RemovalDeclined => Ok(self),
        }
    }
}
