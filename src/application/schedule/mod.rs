//! Scheduled passes
//!
//! Drives cleanup passes from a `Schedule`. The scheduler knows nothing about
//! buckets or files: it calls a pass closure and logs the outcome.

mod runner;

pub use runner::{RunSummary, Scheduler};
