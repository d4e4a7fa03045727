//! Event Sink Implementations
//!
//! Machine-readable implementations of the PipelineEventSink port.
//! The console sink lives in `presentation::output`.

mod json;

pub use json::{event_to_json, JsonEventSink};
