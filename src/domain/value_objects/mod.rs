//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod schedule;
mod version;

pub use config_warning::ConfigWarning;
pub use schedule::Schedule;
pub use version::{Identifier, Version, VersionError};
