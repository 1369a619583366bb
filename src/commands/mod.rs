//! Command handlers

pub mod check;
pub mod clean;
pub mod next;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use cleaner::Config;

/// Load and validate the config, logging unknown keys
pub fn load_config(path: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("loading config {}", path.display()))?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(config)
}
