//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for scripting and CI consumption.

use crate::domain::ports::{PipelineEvent, PipelineEventSink};
use crate::domain::value_objects::{ProcessFailure, StageOutcome};
use std::io::{self, Write};
use std::sync::Mutex;

const COMMAND: &str = "compress";

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure serialized writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn display(path: &std::path::Path) -> String {
    path.display().to_string()
}

fn outcome_fields(outcome: &StageOutcome, program: &str) -> serde_json::Value {
    let mut fields = serde_json::json!({
        "outcome": outcome.kind(),
        "message": outcome.describe(program),
    });
    match outcome {
        StageOutcome::ToolFailure { code } => {
            fields["code"] = serde_json::json!(code);
        }
        StageOutcome::ProcessError(ProcessFailure::Signal { signal }) => {
            fields["signal"] = serde_json::json!(signal);
        }
        StageOutcome::Success
        | StageOutcome::ProcessError(ProcessFailure::Spawn { .. })
        | StageOutcome::ProcessError(ProcessFailure::Abnormal) => {}
    }
    fields
}

/// Build the JSON object for an event
pub fn event_to_json(event: &PipelineEvent) -> serde_json::Value {
    match event {
        PipelineEvent::Started {
            directory,
            archive,
            compressed,
        } => serde_json::json!({
            "event": "start",
            "command": COMMAND,
            "directory": display(directory),
            "archive": display(archive),
            "compressed": display(compressed),
        }),

        PipelineEvent::StageStarted { stage, command } => serde_json::json!({
            "event": "stage_start",
            "command": COMMAND,
            "stage": stage,
            "command_line": command,
        }),

        PipelineEvent::StageSucceeded { stage } => serde_json::json!({
            "event": "stage_success",
            "command": COMMAND,
            "stage": stage,
        }),

        PipelineEvent::StageFailed {
            stage,
            program,
            outcome,
        } => {
            let mut json = serde_json::json!({
                "event": "stage_failed",
                "command": COMMAND,
                "stage": stage,
                "program": program,
            });
            if let (Some(target), serde_json::Value::Object(extra)) =
                (json.as_object_mut(), outcome_fields(outcome, program))
            {
                target.extend(extra);
            }
            json
        }

        PipelineEvent::PartialRemoved { path } => serde_json::json!({
            "event": "partial_removed",
            "command": COMMAND,
            "path": display(path),
        }),

        PipelineEvent::CleanupFailed { path, error } => serde_json::json!({
            "event": "cleanup_failed",
            "command": COMMAND,
            "path": display(path),
            "error": error,
        }),

        PipelineEvent::ArtifactKept { path } => serde_json::json!({
            "event": "artifact_kept",
            "command": COMMAND,
            "path": display(path),
        }),

        PipelineEvent::AwaitingConfirmation => serde_json::json!({
            "event": "awaiting_confirmation",
            "command": COMMAND,
        }),

        PipelineEvent::RemovalDeclined {
            directory,
            archive,
            compressed,
        } => serde_json::json!({
            "event": "removal_declined",
            "command": COMMAND,
            "directory": display(directory),
            "archive": display(archive),
            "compressed": display(compressed),
        }),

        PipelineEvent::Removed { directory, archive } => serde_json::json!({
            "event": "removed",
            "command": COMMAND,
            "directory": display(directory),
            "archive": display(archive),
        }),

        PipelineEvent::ManualCleanupRequired { paths } => serde_json::json!({
            "event": "manual_cleanup_required",
            "command": COMMAND,
            "paths": paths.iter().map(|p| display(p)).collect::<Vec<_>>(),
        }),

        PipelineEvent::Completed {
            success,
            compressed,
        } => serde_json::json!({
            "event": "complete",
            "command": COMMAND,
            "status": if *success { "success" } else { "failed" },
            "compressed": compressed.as_deref().map(display),
        }),
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        self.write_event(event_to_json(&event));
    }
}
