//! Domain Layer
//!
//! Pure pipeline concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (NormalizedPath, ArtifactPaths, StageOutcome)
//! - `ports/` - Interface definitions for infrastructure (ToolRunner, Confirmer, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod value_objects;
