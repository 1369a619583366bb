//! Next command handler

use std::path::Path;

use anyhow::{anyhow, Result};
use chrono::Local;

use cleaner::presentation::output::{next_run_event, render_next_run};
use cleaner::Scheduler;

use super::load_config;

pub fn cmd_next(config_path: &Path, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let scheduler = Scheduler::new(config.parsed_schedule()?);
    let next = scheduler
        .next_run(Local::now())
        .ok_or_else(|| anyhow!("schedule '{}' has no upcoming runs", config.schedule))?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&next_run_event(&config.schedule, next))?
        );
    } else {
        println!("{}", render_next_run(next));
    }
    Ok(())
}
