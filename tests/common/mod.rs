//! Common test utilities for dirpress integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory plus helpers to run the binary
//! - `tool_available`: Skip checks for tests that need `tar`/`lz4`

pub mod env;

pub use env::*;
