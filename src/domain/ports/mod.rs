//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod file_system;
pub mod pipeline_events;
pub mod tool_runner;

pub use confirmer::{is_affirmative, ConfirmationRequest, Confirmer, DeclineConfirmer};
pub use file_system::{FileSystem, FsError, FsResult};
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};
pub use tool_runner::{ToolInvocation, ToolRunner};
