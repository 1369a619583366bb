//! Application Layer
//!
//! Use cases that orchestrate the domain services against real ports.
//!
//! ## Use Cases
//!
//! - `CleanUseCase` - build a deletion plan for a configuration, then list or
//!   apply it
//! - `Scheduler` - run passes at the times a `Schedule` names

pub mod clean;
pub mod schedule;

pub use clean::{CleanOptions, CleanResult, CleanUseCase, DeletionExecutor};
pub use schedule::{RunSummary, Scheduler};
