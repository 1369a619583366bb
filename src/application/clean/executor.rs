//! Deletion executor
//!
//! Applies a `DeletionPlan`: either lists it or removes the files, writing one
//! line per file to the injected output sink and reporting each step to the
//! event sink as it happens.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::domain::entities::DeletionPlan;
use crate::domain::ports::{CleanEvent, CleanEventSink, FileSystem, NoopEventSink};
use crate::error::{CleanerError, CleanerResult};

use super::result::CleanResult;

pub struct DeletionExecutor<'a, FS: FileSystem> {
    fs: &'a FS,
    events: &'a dyn CleanEventSink,
}

impl<'a, FS: FileSystem> DeletionExecutor<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self {
            fs,
            events: &NoopEventSink,
        }
    }

    pub fn with_events(mut self, events: &'a dyn CleanEventSink) -> Self {
        self.events = events;
        self
    }

    /// Write `Will delete: <relative path>` for every planned file.
    pub fn dry_run(
        &self,
        base: &Path,
        plan: &DeletionPlan,
        out: &mut dyn Write,
    ) -> CleanerResult<CleanResult> {
        let mut result = CleanResult::new(true);
        result.kept = plan.kept_count();
        self.events.on_event(CleanEvent::Started {
            dry_run: true,
            file_count: plan.len(),
        });
        for path in plan.paths() {
            let shown = path.strip_prefix(base).unwrap_or(path);
            writeln!(out, "Will delete: {}", shown.display())?;
            self.events
                .on_event(CleanEvent::FileWouldDelete { path: path.clone() });
            result.add_deleted(path.clone());
        }
        self.completed(&result);
        Ok(result)
    }

    /// Write `Deleting <path>` and remove each planned file in plan order.
    ///
    /// Stops at the first failure; files removed before it stay removed and
    /// have already been reported.
    pub fn delete(&self, plan: &DeletionPlan, out: &mut dyn Write) -> CleanerResult<CleanResult> {
        let mut result = CleanResult::new(false);
        result.kept = plan.kept_count();
        self.events.on_event(CleanEvent::Started {
            dry_run: false,
            file_count: plan.len(),
        });
        for path in plan.paths() {
            writeln!(out, "Deleting {}", path.display())?;
            if let Err(source) = self.fs.remove(path) {
                self.events.on_event(CleanEvent::FileError {
                    path: path.clone(),
                    error: source.to_string(),
                });
                return Err(CleanerError::Deletion {
                    path: path.clone(),
                    deleted: result.deleted.len(),
                    source,
                });
            }
            debug!(path = %path.display(), "deleted");
            self.events
                .on_event(CleanEvent::FileDeleted { path: path.clone() });
            result.add_deleted(path.clone());
        }
        self.completed(&result);
        Ok(result)
    }

    fn completed(&self, result: &CleanResult) {
        self.events.on_event(CleanEvent::Completed {
            dry_run: result.dry_run,
            deleted: result.deleted.len(),
            kept: result.kept,
        });
    }
}
