//! Use Case Factory
//!
//! Creates the use case and event sink with infrastructure dependencies
//! wired up. This is the dependency injection point for the binary.

use crate::application::{CompressOptions, CompressUseCase};
use crate::domain::ports::PipelineEventSink;
use crate::infrastructure::{ChildOutput, JsonEventSink, LocalFs, ProcessRunner, StdinConfirmer};

use super::cli::Cli;
use super::output::ConsoleEventSink;
use super::terminal::detect_capabilities;

/// Type alias for the concrete CompressUseCase with all dependencies
pub type ConcreteCompressUseCase = CompressUseCase<ProcessRunner, StdinConfirmer, LocalFs>;

/// Create a compress use case with real tools, stdin confirmation and the
/// local file system.
///
/// In JSON mode the tools' stdout is discarded so the event stream stays
/// parseable; their stderr always reaches the terminal.
pub fn create_compress_use_case(json: bool) -> ConcreteCompressUseCase {
    let stdout = if json {
        ChildOutput::Discard
    } else {
        ChildOutput::Inherit
    };
    let runner = ProcessRunner::new().with_stdout(stdout);

    CompressUseCase::new(
        runner,
        StdinConfirmer::new(),
        LocalFs::new(),
        CompressOptions::new(),
    )
}

/// Pick the event sink for the requested output mode
pub fn create_event_sink(cli: &Cli) -> Box<dyn PipelineEventSink> {
    if cli.json {
        return Box::new(JsonEventSink::stdout());
    }

    let caps = detect_capabilities().with_color_choice(cli.color);
    Box::new(ConsoleEventSink::new(caps, cli.verbose > 0))
}
