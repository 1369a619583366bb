//! DeletionPlan entity - the outcome of evaluating every rule once
//!
//! Built fresh for each pass and never persisted. Entries follow
//! configuration order; paths within an entry are oldest first.

use std::path::PathBuf;

/// Evaluation of one rule in one bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePlan {
    pub bucket: String,
    pub pattern: String,
    pub retain: usize,
    /// Files that survive, oldest first
    pub kept: Vec<PathBuf>,
    /// Files selected for removal, oldest first
    pub delete: Vec<PathBuf>,
}

/// The aggregate plan for a whole configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    pub rules: Vec<RulePlan>,
}

impl DeletionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: RulePlan) {
        self.rules.push(rule);
    }

    /// All paths to delete, in execution order
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.rules.iter().flat_map(|r| r.delete.iter())
    }

    /// Number of files to delete
    pub fn len(&self) -> usize {
        self.rules.iter().map(|r| r.delete.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of matched files that are retained
    pub fn kept_count(&self) -> usize {
        self.rules.iter().map(|r| r.kept.len()).sum()
    }
}
