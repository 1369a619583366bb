//! Cleaner CLI - removes old versions of files from bucket directories
//!
//! Usage: cleaner [-c config.toml] [--dry-run] [COMMAND]
//!
//! Commands:
//!   clean  Run one cleanup pass now
//!   run    Run cleanup passes on the configured schedule (default)
//!   next   Print when the next scheduled cleanup will occur
//!   check  Validate the config file

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use cleaner::presentation::{Cli, Commands};

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.resolved_command() {
        Commands::Clean { dry_run } => {
            commands::clean::cmd_clean(&cli.config_file, dry_run, cli.json)
        }
        Commands::Run => commands::run::cmd_run(&cli.config_file),
        Commands::Next => commands::next::cmd_next(&cli.config_file, cli.json),
        Commands::Check => commands::check::cmd_check(&cli.config_file, cli.json),
    }
}
