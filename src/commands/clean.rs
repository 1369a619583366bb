//! Clean command handler
//!
//! One pass now. Text mode writes the executor's per-file lines to stdout;
//! JSON mode discards them and streams events instead, so files removed
//! before a failure are still reported.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use cleaner::infrastructure::JsonEventSink;
use cleaner::presentation::create_clean_use_case;
use cleaner::CleanOptions;

use super::load_config;

pub fn cmd_clean(config_path: &Path, dry_run: bool, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let buckets = config.retention_buckets()?;
    let use_case = create_clean_use_case();
    let options = CleanOptions::new().with_dry_run(dry_run);

    if json {
        let events = JsonEventSink::stdout(&config.base_directory);
        use_case.run_with_events(
            &config.base_directory,
            &buckets,
            &options,
            &mut io::sink(),
            &events,
        )?;
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        use_case.run(&config.base_directory, &buckets, &options, &mut out)?;
        out.flush()?;
    }

    Ok(())
}
