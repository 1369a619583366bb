//! RetentionRule and Bucket entities
//!
//! Compiled, validated forms of the `[[bucket]]` / `[[bucket.file]]` config
//! tables. Construction fails instead of producing a rule that could never
//! extract a version.

use regex::Regex;

use crate::error::{CleanerError, CleanerResult};

/// One file class: a pattern capturing the version, and how many to keep
#[derive(Debug, Clone)]
pub struct RetentionRule {
    pattern: Regex,
    retain: usize,
}

impl RetentionRule {
    /// Compile a rule. The pattern must have exactly one capture group.
    pub fn new(bucket: &str, pattern: &str, retain: usize) -> CleanerResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| CleanerError::InvalidPattern {
            bucket: bucket.to_string(),
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(CleanerError::CaptureGroups {
                bucket: bucket.to_string(),
                pattern: pattern.to_string(),
                groups,
            });
        }

        Ok(Self {
            pattern: regex,
            retain,
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Number of most recent versions to keep (0 deletes every match)
    pub fn retain(&self) -> usize {
        self.retain
    }
}

/// A named subdirectory of the base directory and its rules
#[derive(Debug, Clone)]
pub struct Bucket {
    pub name: String,
    pub rules: Vec<RetentionRule>,
}

impl Bucket {
    /// Create a bucket, rejecting names that are not a single directory name
    pub fn new(name: impl Into<String>, rules: Vec<RetentionRule>) -> CleanerResult<Self> {
        let name = name.into();
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\');
        if invalid {
            return Err(CleanerError::InvalidBucketName { name });
        }
        Ok(Self { name, rules })
    }
}
