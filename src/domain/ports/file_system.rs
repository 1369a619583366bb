//! FileSystem port - the two operations a cleanup pass needs
//!
//! Listing is non-recursive; the scanner decides what to do with
//! subdirectories.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub file_name: OsString,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        let path = path.into();
        let file_name = path.file_name().map(OsString::from).unwrap_or_default();
        Self {
            file_name,
            path,
            is_dir,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - test doubles that fail on demand
pub trait FileSystem {
    /// List the direct children of a directory
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Remove a single file
    fn remove(&self, path: &Path) -> io::Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).list_dir(path)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        (**self).remove(path)
    }
}
