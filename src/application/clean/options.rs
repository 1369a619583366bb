//! Clean options

/// Options for a cleanup pass
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Only list what would be deleted
    pub dry_run: bool,
}

impl CleanOptions {
    /// Create new clean options (real run)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
