//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `process/` - Child process runner and Ctrl-C handling
//! - `prompt/` - Interactive confirmation
//! - `events/` - JSON event stream

pub mod events;
pub mod fs;
pub mod process;
pub mod prompt;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::{ChildOutput, ProcessRunner};
pub use prompt::StdinConfirmer;
