//! Clean result types

use std::path::PathBuf;

/// Result of a completed cleanup pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// Files deleted (or that would be deleted in a dry run), in order
    pub deleted: Vec<PathBuf>,
    /// Matched files that were retained
    pub kept: usize,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl CleanResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn add_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    /// Nothing was (or would be) deleted
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}
