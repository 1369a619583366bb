//! Configuration module for Cleaner
//!
//! Resolution order:
//! 1. Environment variables (`CLEANER_BASE_DIRECTORY`, `CLEANER_SCHEDULE`)
//! 2. Config file (`config.toml` or `--config-file`)
//! 3. Built-in defaults (schedule `@weekly`)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{apply_overrides, load_with_warnings, with_env_overrides};
pub use types::{BucketConfig, Config, FileRuleConfig, DEFAULT_SCHEDULE};
