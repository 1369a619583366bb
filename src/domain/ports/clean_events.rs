//! Clean Event Port
//!
//! Observable interface for a cleanup pass. Events are emitted as the pass
//! runs, so a failed deletion still reports every file removed before it.

use std::path::PathBuf;

/// Event emitted while executing a deletion plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanEvent {
    /// Execution started
    Started { dry_run: bool, file_count: usize },

    /// Dry run: file would be deleted
    FileWouldDelete { path: PathBuf },

    /// File was removed
    FileDeleted { path: PathBuf },

    /// Removing a file failed; the pass stops here
    FileError { path: PathBuf, error: String },

    /// Every planned file was handled
    Completed {
        dry_run: bool,
        deleted: usize,
        kept: usize,
    },
}

/// Trait for receiving clean events
///
/// Implementations:
/// - `JsonEventSink`: NDJSON event stream
/// - `NoopEventSink`: silent operation
pub trait CleanEventSink: Send + Sync {
    fn on_event(&self, event: CleanEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CleanEventSink for NoopEventSink {
    fn on_event(&self, _event: CleanEvent) {}
}
