//! Stage Outcome Value Objects
//!
//! The tagged result of running one external tool. The pipeline gates on
//! these values only, never on raw exit status bits.

use serde::Serialize;
use std::fmt;

/// One of the three pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Create `<base>.tar`
    Archive,
    /// Create `<base>.tar.lz4`
    Compress,
    /// Remove the archive and the original directory
    Remove,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Archive => "archive",
            Stage::Compress => "compress",
            Stage::Remove => "remove",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a tool could not run to a normal exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessFailure {
    /// The child could not be launched at all
    Spawn { message: String },
    /// The child was terminated by a signal
    Signal { signal: i32 },
    /// The child ended without exit code or signal
    Abnormal,
}

impl fmt::Display for ProcessFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessFailure::Spawn { message } => write!(f, "could not be started: {}", message),
            ProcessFailure::Signal { signal } => {
                write!(f, "terminated abnormally (signal {})", signal)
            }
            ProcessFailure::Abnormal => write!(f, "ended abnormally for an unknown reason"),
        }
    }
}

/// Result of a single stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// Tool exited with status 0
    Success,
    /// Tool ran and exited with a non-zero status
    ToolFailure { code: i32 },
    /// Tool could not run, or was killed
    ProcessError(ProcessFailure),
}

impl StageOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StageOutcome::Success)
    }

    /// Short machine-readable kind, used in JSON events
    pub fn kind(&self) -> &'static str {
        match self {
            StageOutcome::Success => "success",
            StageOutcome::ToolFailure { .. } => "tool_failure",
            StageOutcome::ProcessError(_) => "process_error",
        }
    }

    /// Human-readable description for `program`
    pub fn describe(&self, program: &str) -> String {
        match self {
            StageOutcome::Success => format!("'{}' succeeded", program),
            StageOutcome::ToolFailure { code } => {
                format!("'{}' exited with status {}", program, code)
            }
            StageOutcome::ProcessError(failure) => format!("'{}' {}", program, failure),
        }
    }
}
