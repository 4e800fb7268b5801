use std::path::PathBuf;

use thiserror::Error;

use crate::report::ParseError;

#[derive(Error, Debug)]
pub enum RobotGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse report: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("No files found matching the report filename pattern '{pattern}' in {}", directory.display())]
    NoReportsFound { directory: PathBuf, pattern: String },

    #[error("No readable files found matching the report filename pattern '{pattern}' in {}", directory.display())]
    NoReadableReports { directory: PathBuf, pattern: String },

    #[error("Failed tests count ({failed}) exceeds the pass threshold ({threshold})")]
    ThresholdExceeded { failed: u64, threshold: u64 },

    #[error("Failed to write output: {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl RobotGuardError {
    /// Whether this error comes from the threshold decision rather than from
    /// configuration or I/O.
    #[must_use]
    pub const fn is_threshold_exceeded(&self) -> bool {
        matches!(self, Self::ThresholdExceeded { .. })
    }
}

pub type Result<T> = std::result::Result<T, RobotGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
