//! Check command handler
//!
//! Loads and validates the config, then evaluates the plan without touching
//! any file.

use std::path::Path;

use anyhow::Result;

use cleaner::presentation::create_clean_use_case;
use cleaner::presentation::output::{check_event, render_check};

use super::load_config;

pub fn cmd_check(config_path: &Path, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let buckets = config.retention_buckets()?;
    let plan = create_clean_use_case().plan(&config.base_directory, &buckets)?;

    if json {
        println!("{}", serde_json::to_string(&check_event(&plan))?);
    } else {
        print!("{}", render_check(&plan));
    }
    Ok(())
}
