//! Domain Ports
//!
//! Interfaces the domain needs from the outside world.

pub mod clean_events;
pub mod file_system;

pub use clean_events::{CleanEvent, CleanEventSink, NoopEventSink};
pub use file_system::{DirEntry, FileSystem};
