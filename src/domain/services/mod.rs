//! Domain Services
//!
//! The retention-selection pipeline: scan a bucket, extract version tokens,
//! order them, select what to delete. Only the scanner touches the file
//! system, and only through the `FileSystem` port.

mod extractor;
mod orderer;
mod scanner;
mod selector;

pub use extractor::VersionExtractor;
pub use orderer::{OrderedVersions, VersionOrderer};
pub use scanner::BucketScanner;
pub use selector::RetentionSelector;
