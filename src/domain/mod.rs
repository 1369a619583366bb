//! Domain Layer
//!
//! The retention logic, without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - RetentionRule, Bucket, CandidateFile, DeletionPlan
//! - `value_objects/` - Version, Schedule, ConfigWarning
//! - `services/` - BucketScanner, VersionExtractor, VersionOrderer, RetentionSelector
//! - `ports/` - FileSystem, CleanEventSink

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
