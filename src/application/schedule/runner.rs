//! Scheduler loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::{error, info, warn};

use crate::domain::value_objects::Schedule;
use crate::error::CleanerResult;

/// How often the wait loop re-checks the shutdown flag
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Counters for a finished scheduler run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passes: usize,
    pub failures: usize,
}

/// Runs one pass at each scheduled time until asked to stop
pub struct Scheduler {
    schedule: Schedule,
    poll: Duration,
}

impl Scheduler {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            poll: POLL_INTERVAL,
        }
    }

    /// Override the shutdown polling interval
    pub fn with_poll_interval(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// When the next pass would start if the loop were waiting at `now`.
    ///
    /// Schedules are evaluated in local time.
    pub fn next_run(&self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        self.schedule.next_after(&now)
    }

    /// Block, running `pass` at every scheduled time while `running` is set.
    ///
    /// Passes run inline, so two never overlap. A failed pass is logged and
    /// the loop waits for the next scheduled time. `pass` returns the number
    /// of files it deleted.
    pub fn run<F>(&self, running: &AtomicBool, mut pass: F) -> RunSummary
    where
        F: FnMut() -> CleanerResult<usize>,
    {
        let mut summary = RunSummary::default();

        while running.load(Ordering::SeqCst) {
            let Some(next) = self.next_run(Local::now()) else {
                warn!(schedule = %self.schedule, "schedule has no upcoming runs");
                break;
            };
            info!("Cleanup will occur next at {}", next.to_rfc3339());

            if !self.wait_until(next, running) {
                break;
            }

            summary.passes += 1;
            match pass() {
                Ok(deleted) => info!(deleted, "cleanup pass complete"),
                Err(e) => {
                    summary.failures += 1;
                    error!(error = %e, "cleanup pass failed");
                }
            }
        }

        info!(passes = summary.passes, "scheduler stopped");
        summary
    }

    /// Sleep until `deadline`; false if `running` was cleared first
    fn wait_until(&self, deadline: DateTime<Local>, running: &AtomicBool) -> bool {
        loop {
            if !running.load(Ordering::SeqCst) {
                return false;
            }
            let remaining = match (deadline - Local::now()).to_std() {
                Ok(d) if !d.is_zero() => d,
                // Deadline passed
                _ => return true,
            };
            std::thread::sleep(remaining.min(self.poll));
        }
    }
}
