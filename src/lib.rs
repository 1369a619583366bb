//! Cleaner - keeps the N most recent versions of each file class
//!
//! Files live in bucket directories under a base directory. Each bucket has
//! retention rules: a regex whose single capture group is the version, and
//! how many versions to keep. A pass scans, orders versions, and deletes
//! everything older than the newest N.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CleanOptions, CleanResult, CleanUseCase, Scheduler};
pub use config::Config;
pub use domain::entities::{Bucket, DeletionPlan, RetentionRule};
pub use domain::value_objects::{Schedule, Version};
pub use error::{CleanerError, CleanerResult};
