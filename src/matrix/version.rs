//! Numeric version attribute of an API version node.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// A `major.minor` version, parsed once at construction.
///
/// Comparison is numeric ("4.10" is newer than "4.6"), while display keeps
/// the original spelling ("3.0" stays "3.0"). Equality ignores the spelling.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct VersionNumber {
    raw: String,
    major: u32,
    minor: u32,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,

    #[error("malformed version {input:?}")]
    Malformed { input: String },
}

impl VersionNumber {
    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// The original spelling.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for VersionNumber {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let malformed = || VersionParseError::Malformed {
            input: input.to_owned(),
        };

        let (major, minor) = match input.split_once('.') {
            Some((major, minor)) => (
                major.parse().map_err(|_| malformed())?,
                minor.parse().map_err(|_| malformed())?,
            ),
            None => (input.parse().map_err(|_| malformed())?, 0),
        };

        Ok(VersionNumber {
            raw: input.to_owned(),
            major,
            minor,
        })
    }
}

impl TryFrom<String> for VersionNumber {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl PartialEq for VersionNumber {
    fn eq(&self, other: &Self) -> bool {
        (self.major, self.minor) == (other.major, other.minor)
    }
}

impl Eq for VersionNumber {}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor).cmp(&(other.major, other.minor))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
