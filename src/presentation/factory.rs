//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::CleanUseCase;
use crate::infrastructure::LocalFs;

/// The clean use case over the local disk
pub type ConcreteCleanUseCase = CleanUseCase<LocalFs>;

/// Create a clean use case with all dependencies wired up
pub fn create_clean_use_case() -> ConcreteCleanUseCase {
    CleanUseCase::new(LocalFs::new())
}
