//! CandidateFile entity - a scanned file and its raw version token

use std::path::PathBuf;

/// A file matching a rule's pattern, with the captured version token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Raw substring captured by group 1
    pub token: String,
    /// Full path (`<base>/<bucket>/<filename>`)
    pub path: PathBuf,
}

impl CandidateFile {
    pub fn new(token: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            token: token.into(),
            path: path.into(),
        }
    }
}
