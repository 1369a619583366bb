//! Clean Use Case
//!
//! Planning is fully separated from execution: the whole configuration is
//! evaluated before the first file is touched, so a scan or parse failure in
//! any rule leaves the file system untouched.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::entities::{Bucket, DeletionPlan, RulePlan};
use crate::domain::ports::{CleanEventSink, FileSystem, NoopEventSink};
use crate::domain::services::{BucketScanner, RetentionSelector, VersionOrderer};
use crate::error::CleanerResult;

use super::executor::DeletionExecutor;
use super::options::CleanOptions;
use super::result::CleanResult;

/// Clean use case - evaluates retention rules and applies the result
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Compute the deletion plan for every bucket and rule.
    ///
    /// Read-only. Entries follow configuration order.
    pub fn plan(&self, base: &Path, buckets: &[Bucket]) -> CleanerResult<DeletionPlan> {
        let scanner = BucketScanner::new(&self.fs);
        let mut plan = DeletionPlan::new();

        for bucket in buckets {
            for rule in &bucket.rules {
                let candidates = scanner.scan(base, &bucket.name, rule)?;
                let ordered = VersionOrderer::order(rule.pattern_str(), candidates)?;
                let (delete, keep) = RetentionSelector::select(&ordered, rule.retain());

                plan.push(RulePlan {
                    bucket: bucket.name.clone(),
                    pattern: rule.pattern_str().to_string(),
                    retain: rule.retain(),
                    kept: keep.iter().map(|(_, path)| path.clone()).collect(),
                    delete: delete.iter().map(|(_, path)| path.clone()).collect(),
                });
            }
        }

        info!(
            delete = plan.len(),
            keep = plan.kept_count(),
            "evaluated retention rules"
        );
        Ok(plan)
    }

    /// Apply a plan in the requested mode, reporting to `out`
    pub fn execute(
        &self,
        base: &Path,
        plan: &DeletionPlan,
        options: &CleanOptions,
        out: &mut dyn Write,
    ) -> CleanerResult<CleanResult> {
        self.execute_with_events(base, plan, options, out, &NoopEventSink)
    }

    /// Like `execute`, also streaming per-file events to `events`
    pub fn execute_with_events(
        &self,
        base: &Path,
        plan: &DeletionPlan,
        options: &CleanOptions,
        out: &mut dyn Write,
        events: &dyn CleanEventSink,
    ) -> CleanerResult<CleanResult> {
        let executor = DeletionExecutor::new(&self.fs).with_events(events);
        if options.dry_run {
            executor.dry_run(base, plan, out)
        } else {
            executor.delete(plan, out)
        }
    }

    /// One full pass: plan, then execute
    pub fn run(
        &self,
        base: &Path,
        buckets: &[Bucket],
        options: &CleanOptions,
        out: &mut dyn Write,
    ) -> CleanerResult<CleanResult> {
        self.run_with_events(base, buckets, options, out, &NoopEventSink)
    }

    /// One full pass, streaming per-file events to `events`
    pub fn run_with_events(
        &self,
        base: &Path,
        buckets: &[Bucket],
        options: &CleanOptions,
        out: &mut dyn Write,
        events: &dyn CleanEventSink,
    ) -> CleanerResult<CleanResult> {
        let plan = self.plan(base, buckets)?;
        self.execute_with_events(base, &plan, options, out, events)
    }
}
