//! Error types for Roster.
//!
//! Uses `thiserror` for ergonomic error definitions.

use crate::types::FileNameError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for record store operations.
///
/// Every variant is raised before the store is touched, so a returned error
/// always means the store is unchanged.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid ID {0}. ID must be a positive integer")]
    InvalidId(i64),

    #[error("Invalid new ID {0}. New ID must be a positive integer")]
    InvalidNewId(i64),

    #[error("Student with id {0} does not exist in the system")]
    NotFound(i64),

    #[error("Student with id {0} already exists in the system")]
    DuplicateId(i64),

    #[error("Invalid name {0:?}. Name must contain alphabetic characters and spaces only")]
    InvalidName(String),

    #[error("Invalid grade {0}. Grade must be between 0 and 100 (inclusive)")]
    InvalidGrade(f64),

    #[error(transparent)]
    InvalidFileName(#[from] FileNameError),

    #[error("Student Record System is empty, nothing to save")]
    EmptyStore,

    #[error("File {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record file error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while resolving paths or reading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a home directory for configuration")]
    DirectoryNotFound,

    #[error("failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    FileName(#[from] FileNameError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;
