//! CLI Argument Parsing
//!
//! Without a subcommand the binary behaves like a classic cron-style
//! daemon: `--dry-run` lists deletions and exits, otherwise it starts the
//! scheduler.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cleaner - removes old versions of files from bucket directories
#[derive(Parser, Debug)]
#[command(name = "cleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Location of config.toml
    #[arg(short, long = "config-file", global = true, default_value = "config.toml")]
    pub config_file: PathBuf,

    /// List files to delete but do not delete them (also applies to `clean` and `run`)
    #[arg(long)]
    pub dry_run: bool,

    /// Output JSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run one cleanup pass now
    Clean {
        /// List files to delete but do not delete them
        #[arg(long)]
        dry_run: bool,
    },

    /// Run cleanup passes on the configured schedule until interrupted
    Run,

    /// Print when the next scheduled cleanup will occur
    Next,

    /// Validate the config file and summarize what each rule would do
    Check,
}

impl Cli {
    /// The command to execute, after applying the no-subcommand defaults.
    ///
    /// A top-level `--dry-run` is never dropped: it turns `clean` into a dry
    /// pass, and `run` into a single dry pass instead of the scheduler.
    pub fn resolved_command(&self) -> Commands {
        match &self.command {
            Some(Commands::Clean { dry_run }) => Commands::Clean {
                dry_run: *dry_run || self.dry_run,
            },
            Some(Commands::Run) | None if self.dry_run => Commands::Clean { dry_run: true },
            Some(command) => command.clone(),
            None => Commands::Run,
        }
    }
}
