//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Wires concrete dependencies (dependency injection)
//! - `output` - Console event rendering and error printing
//! - `terminal` / `theme` - Capability detection and design tokens
//!
//! ## Usage
//!
//! ```ignore
//! use dirpress::presentation::factory;
//!
//! let use_case = factory::create_compress_use_case(false);
//! let report = use_case.execute(&target, &sink)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;
pub mod terminal;
pub mod theme;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_compress_use_case, create_event_sink};
