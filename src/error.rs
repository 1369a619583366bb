//! Error types for Cleaner
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::VersionError;

/// Result type alias for Cleaner operations
pub type CleanerResult<T> = Result<T, CleanerError>;

/// Main error type for Cleaner operations
#[derive(Error, Debug)]
pub enum CleanerError {
    /// Config file could not be read
    #[error("failed to read config file {file}: {source}")]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("invalid config file {file}: {message}")]
    ConfigSyntax { file: PathBuf, message: String },

    /// Pattern is not a valid regular expression
    #[error("invalid pattern '{pattern}' in bucket '{bucket}': {message}")]
    InvalidPattern {
        bucket: String,
        pattern: String,
        message: String,
    },

    /// Pattern must capture exactly one group (the version token)
    #[error("pattern '{pattern}' in bucket '{bucket}' has {groups} capture groups, expected exactly 1")]
    CaptureGroups {
        bucket: String,
        pattern: String,
        groups: usize,
    },

    /// Bucket name does not map to a single subdirectory
    #[error("invalid bucket name '{name}': must be a single directory name")]
    InvalidBucketName { name: String },

    /// Schedule expression could not be parsed
    #[error("invalid schedule '{expression}': {message}")]
    InvalidSchedule { expression: String, message: String },

    /// Bucket directory could not be listed
    #[error("error walking bucket {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Captured token is not a version
    #[error("cannot parse version from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: VersionError,
    },

    /// Two files of one rule normalize to the same version
    #[error("files {first} and {second} both resolve to version {version} for pattern '{pattern}'")]
    DuplicateVersion {
        pattern: String,
        version: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A planned file could not be removed
    #[error("failed to delete {path} after {deleted} deletions: {source}")]
    Deletion {
        path: PathBuf,
        deleted: usize,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
