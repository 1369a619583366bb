//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Bucket, RetentionRule};
use crate::domain::value_objects::{ConfigWarning, Schedule};
use crate::error::CleanerResult;

use super::loader;

pub const DEFAULT_SCHEDULE: &str = "@weekly";

fn default_schedule() -> String {
    DEFAULT_SCHEDULE.to_string()
}

/// Root of `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Directory containing one subdirectory per bucket
    pub base_directory: PathBuf,

    #[serde(default = "default_schedule")]
    pub schedule: String,

    #[serde(default, rename = "bucket")]
    pub buckets: Vec<BucketConfig>,
}

/// `[[bucket]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketConfig {
    pub name: String,

    #[serde(default, rename = "file")]
    pub files: Vec<FileRuleConfig>,
}

/// `[[bucket.file]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRuleConfig {
    /// Regex with exactly one capture group around the version
    pub pattern: String,
    /// How many of the newest versions to keep
    pub retainer: usize,
}

impl Config {
    /// Load, apply environment overrides and validate
    pub fn load(path: &Path) -> CleanerResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Like [`Config::load`], also returning unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> CleanerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Compile the bucket tables into validated domain buckets
    pub fn retention_buckets(&self) -> CleanerResult<Vec<Bucket>> {
        self.buckets
            .iter()
            .map(|bucket| {
                let rules = bucket
                    .files
                    .iter()
                    .map(|file| RetentionRule::new(&bucket.name, &file.pattern, file.retainer))
                    .collect::<CleanerResult<Vec<_>>>()?;
                Bucket::new(bucket.name.clone(), rules)
            })
            .collect()
    }

    pub fn parsed_schedule(&self) -> CleanerResult<Schedule> {
        Schedule::parse(&self.schedule)
    }

    /// Check everything that would otherwise fail mid-pass
    pub fn validate(&self) -> CleanerResult<()> {
        self.retention_buckets()?;
        self.parsed_schedule()?;
        Ok(())
    }
}
