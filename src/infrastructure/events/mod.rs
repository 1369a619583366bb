//! Event Sink Implementations

mod json;

pub use json::JsonEventSink;
