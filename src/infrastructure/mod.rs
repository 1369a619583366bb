//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.

pub mod events;
pub mod fs;

pub use events::JsonEventSink;
pub use fs::LocalFs;
