//! Domain Entities
//!
//! - `RetentionRule` / `Bucket` - what to keep, compiled from config
//! - `CandidateFile` - a file that matched a rule during a scan
//! - `DeletionPlan` - what one pass will delete

mod candidate;
mod deletion_plan;
mod retention_rule;

pub use candidate::CandidateFile;
pub use deletion_plan::{DeletionPlan, RulePlan};
pub use retention_rule::{Bucket, RetentionRule};
