//! Compress Use Case
//!
//! Drives the archive → compress → confirm → remove state machine.

use std::path::{Path, PathBuf};

use crate::domain::ports::{
    ConfirmationRequest, Confirmer, FileSystem, PipelineEvent, PipelineEventSink, ToolInvocation,
    ToolRunner,
};
use crate::domain::value_objects::{Stage, StageOutcome};
use crate::error::{DirpressError, DirpressResult};

use super::options::CompressOptions;
use super::result::{CompressReport, PipelineOutcome, PipelineState};
use super::target::CompressTarget;

/// Compress use case - archives, compresses, and (on confirmation) removes
/// the original directory
pub struct CompressUseCase<R, C, FS>
where
    R: ToolRunner,
    C: Confirmer,
    FS: FileSystem,
{
    runner: R,
    confirmer: C,
    fs: FS,
    options: CompressOptions,
}

impl<R, C, FS> CompressUseCase<R, C, FS>
where
    R: ToolRunner,
    C: Confirmer,
    FS: FileSystem,
{
    /// Create a new compress use case
    pub fn new(runner: R, confirmer: C, fs: FS, options: CompressOptions) -> Self {
        Self {
            runner,
            confirmer,
            fs,
            options,
        }
    }

    /// Run the pipeline for a validated target.
    ///
    /// Errors only when the run cannot start (an artifact is already on
    /// disk); stage failures are reported through the returned outcome.
    pub fn execute(
        &self,
        target: &CompressTarget,
        events: &dyn PipelineEventSink,
    ) -> DirpressResult<CompressReport> {
        self.preflight(target)?;

        let artifacts = target.artifacts();
        events.on_event(PipelineEvent::Started {
            directory: target.original().to_path_buf(),
            archive: artifacts.archive().to_path_buf(),
            compressed: artifacts.compressed().to_path_buf(),
        });

        let mut state = PipelineState::Idle;
        let mut states = vec![state.clone()];
        let outcome = loop {
            if let Some(outcome) = PipelineOutcome::from_terminal(&state) {
                break outcome;
            }
            state = self.step(state, target, events);
            states.push(state.clone());
        };

        let compressed = match &outcome {
            PipelineOutcome::Aborted {
                stage: Stage::Archive | Stage::Compress,
                ..
            } => None,
            _ => Some(artifacts.compressed().to_path_buf()),
        };

        events.on_event(PipelineEvent::Completed {
            success: outcome.is_success(),
            compressed: compressed.clone(),
        });

        Ok(CompressReport {
            outcome,
            states,
            compressed,
        })
    }

    /// Refuse to run when either artifact already exists, so cleanup can
    /// only ever touch files this run created.
    fn preflight(&self, target: &CompressTarget) -> DirpressResult<()> {
        let artifacts = target.artifacts();
        for path in [artifacts.archive(), artifacts.compressed()] {
            if self.fs.exists(path) {
                return Err(DirpressError::ArtifactExists {
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }

    /// Advance the state machine by one transition
    fn step(
        &self,
        state: PipelineState,
        target: &CompressTarget,
        events: &dyn PipelineEventSink,
    ) -> PipelineState {
        let artifacts = target.artifacts();

        match state {
            PipelineState::Idle => PipelineState::Archiving,

            PipelineState::Archiving => {
                let invocation = self.archive_invocation(target);
                let outcome = self.run_stage(Stage::Archive, &invocation, events);
                if outcome.is_success() {
                    return PipelineState::Compressing;
                }
                self.discard_partial(artifacts.archive(), events);
                aborted(Stage::Archive, &invocation, outcome)
            }

            PipelineState::Compressing => {
                let invocation = self.compress_invocation(target);
                let outcome = self.run_stage(Stage::Compress, &invocation, events);
                if outcome.is_success() {
                    return PipelineState::AwaitingConfirmation;
                }
                self.discard_partial(artifacts.compressed(), events);
                events.on_event(PipelineEvent::ArtifactKept {
                    path: artifacts.archive().to_path_buf(),
                });
                aborted(Stage::Compress, &invocation, outcome)
            }

            PipelineState::AwaitingConfirmation => {
                events.on_event(PipelineEvent::AwaitingConfirmation);
                let request = ConfirmationRequest {
                    directory: target.original(),
                    archive: artifacts.archive(),
                    compressed: artifacts.compressed(),
                };
                if self.confirmer.confirm(&request) {
                    PipelineState::Removing
                } else {
                    events.on_event(PipelineEvent::RemovalDeclined {
                        directory: target.original().to_path_buf(),
                        archive: artifacts.archive().to_path_buf(),
                        compressed: artifacts.compressed().to_path_buf(),
                    });
                    PipelineState::Done { removed: false }
                }
            }

            PipelineState::Removing => {
                let invocation = self.remove_invocation(target);
                let outcome = self.run_stage(Stage::Remove, &invocation, events);
                if outcome.is_success() {
                    events.on_event(PipelineEvent::Removed {
                        directory: target.original().to_path_buf(),
                        archive: artifacts.archive().to_path_buf(),
                    });
                    return PipelineState::Done { removed: true };
                }
                events.on_event(PipelineEvent::ManualCleanupRequired {
                    paths: vec![
                        target.original().to_path_buf(),
                        artifacts.archive().to_path_buf(),
                    ],
                });
                aborted(Stage::Remove, &invocation, outcome)
            }

            terminal @ (PipelineState::Done { .. } | PipelineState::Aborted { .. }) => terminal,
        }
    }

    /// `tar -cvf <base>.tar -- <base>`, run inside the parent directory
    fn archive_invocation(&self, target: &CompressTarget) -> ToolInvocation {
        let normalized = target.normalized();
        ToolInvocation::new(&self.options.tools.archiver)
            .arg("-cvf")
            .arg(target.artifacts().archive_file_name())
            .arg("--")
            .arg(normalized.base_name())
            .in_dir(normalized.parent())
    }

    /// `lz4 <archive> <compressed>`
    fn compress_invocation(&self, target: &CompressTarget) -> ToolInvocation {
        let artifacts = target.artifacts();
        ToolInvocation::new(&self.options.tools.compressor)
            .arg(not_an_option(artifacts.archive()))
            .arg(not_an_option(artifacts.compressed()))
    }

    /// `rm -rf -- <archive> <original directory>`
    fn remove_invocation(&self, target: &CompressTarget) -> ToolInvocation {
        ToolInvocation::new(&self.options.tools.remover)
            .arg("-rf")
            .arg("--")
            .arg(target.artifacts().archive())
            .arg(target.original())
    }

    fn run_stage(
        &self,
        stage: Stage,
        invocation: &ToolInvocation,
        events: &dyn PipelineEventSink,
    ) -> StageOutcome {
        events.on_event(PipelineEvent::StageStarted {
            stage,
            command: invocation.to_string(),
        });

        let outcome = self.runner.run(invocation);

        if outcome.is_success() {
            events.on_event(PipelineEvent::StageSucceeded { stage });
        } else {
            events.on_event(PipelineEvent::StageFailed {
                stage,
                program: invocation.program_name(),
                outcome: outcome.clone(),
            });
        }
        outcome
    }

    /// Delete a partially written artifact. Failure is reported, not fatal.
    fn discard_partial(&self, path: &Path, events: &dyn PipelineEventSink) {
        match self.fs.remove_file(path) {
            Ok(()) => events.on_event(PipelineEvent::PartialRemoved {
                path: path.to_path_buf(),
            }),
            Err(e) if e.is_not_found() => {}
            Err(e) => events.on_event(PipelineEvent::CleanupFailed {
                path: path.to_path_buf(),
                error: e.to_string(),
            }),
        }
    }
}

/// Prefix a relative path starting with `-` with `./` so a tool without an
/// end-of-options marker reads it as a file.
fn not_an_option(path: &Path) -> PathBuf {
    if path.is_relative() && path.as_os_str().as_encoded_bytes().starts_with(b"-") {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

fn aborted(stage: Stage, invocation: &ToolInvocation, outcome: StageOutcome) -> PipelineState {
    PipelineState::Aborted {
        stage,
        program: invocation.program_name(),
        outcome,
    }
}
