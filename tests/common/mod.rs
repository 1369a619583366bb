//! Common test utilities for cleaner CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated base directory plus config file, and CLI helpers
//! - Fixtures: the seeded bucket layout and a matching config

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
