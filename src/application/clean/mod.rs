//! Clean Use Case
//!
//! Orchestrates one evaluation pass.
//!
//! This module handles:
//! - Scanning every bucket once per rule
//! - Ordering versions and selecting the oldest beyond the retain count
//! - Listing (dry run) or deleting the selected files

mod executor;
mod options;
mod result;
mod use_case;

pub use executor::DeletionExecutor;
pub use options::CleanOptions;
pub use result::CleanResult;
pub use use_case::CleanUseCase;
