//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal configuration warning (an unknown key in the config file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Full dotted path of the unknown key, e.g. `bucket.0.file.1.retain`
    pub key: String,
    /// Config file the key was found in
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, if one is near enough
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "bucket.0.file.0.retain".to_string(),
            file: PathBuf::from("config.toml"),
            line: Some(7),
            suggestion: Some("retainer".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown config key 'bucket.0.file.0.retain' in config.toml:7 (did you mean 'retainer'?)"
        );
    }
}
