//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io;
use std::path::Path;

use crate::domain::ports::{DirEntry, FileSystem};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            // file_type does not follow symlinks: a link to a directory is
            // not descended into, a link to a file is a candidate
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntry {
                file_name: entry.file_name(),
                path: entry.path(),
                is_dir,
            });
        }
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}
