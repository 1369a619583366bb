//! Version Value Object
//!
//! Tolerant semantic-version parsing with standard precedence ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Why a version token was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("empty version token")]
    Empty,

    #[error("'{token}' has too many numeric components")]
    TooManyComponents { token: String },

    #[error("'{token}': '{part}' is not a number")]
    InvalidNumber { token: String, part: String },

    #[error("'{token}' has an empty identifier")]
    EmptyIdentifier { token: String },

    #[error("'{token}': invalid character in identifier '{identifier}'")]
    InvalidIdentifier { token: String, identifier: String },
}

/// A single pre-release identifier
///
/// Numeric identifiers sort before alphanumeric ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed, normalized version
///
/// Equality and ordering ignore build metadata, so `1.0.0+a == 1.0.0+b`.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Vec<Identifier>,
    pub build: Vec<String>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a version token, filling in missing minor/patch with zero.
    ///
    /// Accepts a leading `v`, surrounding whitespace, leading zeros in the
    /// numeric core, and pre-release/build suffixes on short cores
    /// (`2.4-build3` is `2.4.0-build3`).
    pub fn parse_tolerant(token: &str) -> Result<Self, VersionError> {
        let trimmed = token.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let (rest, build) = match trimmed.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (trimmed, None),
        };
        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() > 3 {
            return Err(VersionError::TooManyComponents {
                token: token.to_string(),
            });
        }
        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = parse_number(token, part)?;
        }

        let pre = match pre {
            Some(pre) => split_identifiers(token, pre)?
                .into_iter()
                .map(|id| match id.parse::<u64>() {
                    Ok(n) if id.bytes().all(|b| b.is_ascii_digit()) => Identifier::Numeric(n),
                    _ => Identifier::AlphaNumeric(id.to_string()),
                })
                .collect(),
            None => Vec::new(),
        };
        let build = match build {
            Some(build) => split_identifiers(token, build)?
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            pre,
            build,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }
}

fn parse_number(token: &str, part: &str) -> Result<u64, VersionError> {
    let invalid = || VersionError::InvalidNumber {
        token: token.to_string(),
        part: part.to_string(),
    };
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    part.parse().map_err(|_| invalid())
}

fn split_identifiers<'a>(token: &str, s: &'a str) -> Result<Vec<&'a str>, VersionError> {
    s.split('.')
        .map(|id| {
            if id.is_empty() {
                Err(VersionError::EmptyIdentifier {
                    token: token.to_string(),
                })
            } else if !id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
                Err(VersionError::InvalidIdentifier {
                    token: token.to_string(),
                    identifier: id.to_string(),
                })
            } else {
                Ok(id)
            }
        })
        .collect()
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tolerant(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            let pre: Vec<String> = self.pre.iter().map(ToString::to_string).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}
