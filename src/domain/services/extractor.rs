//! Version token extraction from filenames

use crate::domain::entities::RetentionRule;

/// Pulls the version token (capture group 1) out of a filename
pub struct VersionExtractor;

impl VersionExtractor {
    /// Returns the captured token, or `None` when the filename does not match
    /// or an optional group 1 took no part in the match.
    ///
    /// Matching is unanchored: the pattern may match anywhere in the name.
    pub fn extract<'a>(rule: &RetentionRule, file_name: &'a str) -> Option<&'a str> {
        rule.pattern()
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
