//! Retention selection
//!
//! Pure function over an ascending list: everything except the newest
//! `retain` entries goes.

/// Splits an ascending list into (delete, keep)
pub struct RetentionSelector;

impl RetentionSelector {
    /// Number of oldest entries to delete out of `len` when keeping `retain`
    pub fn delete_count(len: usize, retain: usize) -> usize {
        len.saturating_sub(retain)
    }

    /// Split `ascending` into the prefix to delete and the suffix to keep
    pub fn select<T>(ascending: &[T], retain: usize) -> (&[T], &[T]) {
        ascending.split_at(Self::delete_count(ascending.len(), retain))
    }
}
