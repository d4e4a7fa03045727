//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompressUseCase` - archive, compress, confirm, remove

pub mod compress;

pub use compress::{
    CompressOptions, CompressReport, CompressTarget, CompressUseCase, PipelineOutcome,
    PipelineState, ToolSet,
};
