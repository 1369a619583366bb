//! Run command handler
//!
//! Scheduler loop until Ctrl+C / SIGTERM. The shutdown request is honored
//! between passes, never in the middle of one.

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use cleaner::presentation::create_clean_use_case;
use cleaner::{CleanOptions, Scheduler};

use super::load_config;

pub fn cmd_run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let buckets = config.retention_buckets()?;
    let scheduler = Scheduler::new(config.parsed_schedule()?);
    let use_case = create_clean_use_case();
    let options = CleanOptions::new();

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("setting shutdown handler")?;

    info!(
        schedule = %scheduler.schedule(),
        base = %config.base_directory.display(),
        "scheduler started"
    );

    scheduler.run(&running, || {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        use_case
            .run(&config.base_directory, &buckets, &options, &mut out)
            .map(|result| result.deleted.len())
    });

    Ok(())
}
