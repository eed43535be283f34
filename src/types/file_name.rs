//! Validated base names for record files.
//!
//! A `FileName` is the caller-supplied stem of a record file. It may only
//! contain ASCII letters, digits, hyphens and underscores, so it can never
//! escape the directory it is joined onto.

use std::fmt;
use std::str::FromStr;

/// Extension appended to every record file.
pub const RECORD_FILE_EXTENSION: &str = "txt";

/// A record file base name matching `[-_a-zA-Z0-9]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// The on-disk file name, e.g. `students.txt`.
    pub fn with_extension(&self) -> String {
        format!("{}.{}", self.0, RECORD_FILE_EXTENSION)
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FileName {
    type Err = FileNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FileNameError::Empty);
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(FileNameError::InvalidFormat(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

/// Error type for file name validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileNameError {
    #[error("Invalid file name \"\", no file name given")]
    Empty,
    #[error("Invalid file name {0}")]
    InvalidFormat(String),
}
