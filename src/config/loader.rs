//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{CleanerError, CleanerResult};

use super::types::Config;

const ENV_BASE_DIRECTORY: &str = "CLEANER_BASE_DIRECTORY";
const ENV_SCHEDULE: &str = "CLEANER_SCHEDULE";

/// Load configuration and collect non-fatal warnings (unknown keys).
///
/// Environment overrides are applied before validation.
pub fn load_with_warnings(path: &Path) -> CleanerResult<(Config, Vec<ConfigWarning>)> {
    debug!(path = %path.display(), "reading config file");
    let content = fs::read_to_string(path).map_err(|source| CleanerError::ConfigRead {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CleanerError::ConfigSyntax {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let config = with_env_overrides(config);
    config.validate()?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(&content, &leaf),
                suggestion: suggest_key(&leaf),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply `CLEANER_*` environment variable overrides
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup (the environment in production)
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = lookup(ENV_BASE_DIRECTORY).filter(|v| !v.is_empty()) {
        config.base_directory = PathBuf::from(dir);
    }
    if let Some(schedule) = lookup(ENV_SCHEDULE).filter(|v| !v.trim().is_empty()) {
        config.schedule = schedule;
    }
    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "base-directory",
        "schedule",
        "bucket",
        "name",
        "file",
        "pattern",
        "retainer",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
