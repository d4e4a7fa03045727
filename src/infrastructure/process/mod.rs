//! External Tool Execution
//!
//! Implements the ToolRunner port with real child processes.

pub mod interrupt;
mod runner;

pub use interrupt::{install_handler, INTERRUPTED_EXIT_CODE};
pub use runner::{classify, ChildOutput, ProcessRunner};
