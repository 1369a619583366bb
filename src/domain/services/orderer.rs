//! Version ordering
//!
//! Turns the candidates of one rule into an ascending list of
//! `(Version, path)` pairs. Two candidates that normalize to the same
//! version are reported instead of one silently shadowing the other.

use std::path::PathBuf;

use crate::domain::entities::CandidateFile;
use crate::domain::value_objects::Version;
use crate::error::{CleanerError, CleanerResult};

/// Candidates of one rule, oldest version first
pub type OrderedVersions = Vec<(Version, PathBuf)>;

/// Parses and sorts version tokens
pub struct VersionOrderer;

impl VersionOrderer {
    /// Parse every candidate's token and sort ascending.
    ///
    /// Fails on the first token that is not a version, or when two
    /// candidates share a normalized version.
    pub fn order(pattern: &str, candidates: Vec<CandidateFile>) -> CleanerResult<OrderedVersions> {
        let mut versions = candidates
            .into_iter()
            .map(|candidate| match Version::parse_tolerant(&candidate.token) {
                Ok(version) => Ok((version, candidate.path)),
                Err(source) => Err(CleanerError::Parse {
                    path: candidate.path,
                    source,
                }),
            })
            .collect::<CleanerResult<OrderedVersions>>()?;

        // Stable sort keeps scan order among equal versions, so the duplicate
        // report names files in filename order
        versions.sort_by(|a, b| a.0.cmp(&b.0));

        if let Some(pair) = versions.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(CleanerError::DuplicateVersion {
                pattern: pattern.to_string(),
                version: pair[0].0.to_string(),
                first: pair[0].1.clone(),
                second: pair[1].1.clone(),
            });
        }

        Ok(versions)
    }
}
