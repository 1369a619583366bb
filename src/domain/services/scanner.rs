//! Bucket scanning
//!
//! Lists `<base>/<bucket>` once per rule and keeps the direct children whose
//! names match the rule's pattern.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{CandidateFile, RetentionRule};
use crate::domain::ports::FileSystem;
use crate::error::{CleanerError, CleanerResult};

use super::extractor::VersionExtractor;

/// Finds candidate files for a rule inside one bucket directory
pub struct BucketScanner<'a, FS: FileSystem> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem> BucketScanner<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Scan `base/bucket` for files matching `rule`.
    ///
    /// Subdirectories are skipped, never descended into. The result is sorted
    /// by filename so later stages do not depend on listing order.
    pub fn scan(
        &self,
        base: &Path,
        bucket: &str,
        rule: &RetentionRule,
    ) -> CleanerResult<Vec<CandidateFile>> {
        let dir = base.join(bucket);
        let entries = self.fs.list_dir(&dir).map_err(|source| CleanerError::Walk {
            path: dir.clone(),
            source,
        })?;

        let mut candidates = Vec::new();
        for entry in entries {
            if entry.is_dir {
                continue;
            }
            let Some(name) = entry.file_name.to_str() else {
                debug!(path = %entry.path.display(), "skipping non UTF-8 filename");
                continue;
            };
            if let Some(token) = VersionExtractor::extract(rule, name) {
                candidates.push(CandidateFile::new(token, dir.join(name)));
            }
        }
        candidates.sort_by(|a, b| a.path.cmp(&b.path));

        debug!(
            bucket,
            pattern = rule.pattern_str(),
            matched = candidates.len(),
            "scanned bucket"
        );
        Ok(candidates)
    }
}
