//! JSON Event Sink
//!
//! Writes clean events as NDJSON, one line per event, flushed as they happen.
//! Paths are shown relative to the base directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::domain::ports::{CleanEvent, CleanEventSink};

pub struct JsonEventSink {
    base: PathBuf,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Event sink writing to stdout
    pub fn stdout(base: impl Into<PathBuf>) -> Self {
        Self::with_writer(base, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(base: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            base: base.into(),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.base)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn render(&self, event: CleanEvent) -> Value {
        match event {
            CleanEvent::Started {
                dry_run,
                file_count,
            } => json!({
                "type": "clean_start",
                "dry_run": dry_run,
                "file_count": file_count,
            }),
            CleanEvent::FileWouldDelete { path } => json!({
                "type": "file_would_delete",
                "path": self.relative(&path),
            }),
            CleanEvent::FileDeleted { path } => json!({
                "type": "file_deleted",
                "path": self.relative(&path),
            }),
            CleanEvent::FileError { path, error } => json!({
                "type": "file_error",
                "path": self.relative(&path),
                "error": error,
            }),
            CleanEvent::Completed {
                dry_run,
                deleted,
                kept,
            } => json!({
                "type": "clean_complete",
                "dry_run": dry_run,
                "deleted": deleted,
                "kept": kept,
            }),
        }
    }
}

impl CleanEventSink for JsonEventSink {
    fn on_event(&self, event: CleanEvent) {
        let line = self.render(event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
