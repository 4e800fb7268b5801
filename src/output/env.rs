//! `KEY=VALUE` export of run statistics for CI plugin steps.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, RobotGuardError};
use crate::stats::StatsResult;

/// Environment variable naming the file a CI plugin appends its outputs to.
pub const DRONE_OUTPUT_VAR: &str = "DRONE_OUTPUT";

/// Destination of exported key/value pairs.
pub trait KeyValueSink {
    /// Write every pair, in order.
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written.
    fn write_pairs(&mut self, pairs: &[(&'static str, String)]) -> Result<()>;
}

/// Appends `KEY=VALUE` lines to a file, creating it when missing.
#[derive(Debug, Clone)]
pub struct EnvFileSink {
    path: PathBuf,
}

impl EnvFileSink {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Sink for the file named by `DRONE_OUTPUT`, if it is set and non-empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var_os(DRONE_OUTPUT_VAR)
            .filter(|value| !value.is_empty())
            .map(|value| Self::new(PathBuf::from(value)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueSink for EnvFileSink {
    fn write_pairs(&mut self, pairs: &[(&'static str, String)]) -> Result<()> {
        let to_output_error = |source| RobotGuardError::OutputWrite {
            path: self.path.clone(),
            source,
        };

        let mut content = String::new();
        for (key, value) in pairs {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(to_output_error)
    }
}

/// The exported keys, in a fixed order. Rates carry two decimals.
#[must_use]
pub fn stats_to_pairs(stats: &StatsResult) -> Vec<(&'static str, String)> {
    vec![
        ("TOTAL_SUITES", stats.total_suites.to_string()),
        ("TOTAL_TESTS", stats.total_tests.to_string()),
        ("PASSED_TESTS", stats.passed_tests.to_string()),
        ("FAILED_TESTS", stats.failed_tests.to_string()),
        ("SKIPPED_TESTS", stats.skipped_tests.to_string()),
        ("TOTAL_KEYWORDS", stats.total_keywords.to_string()),
        ("PASSED_KEYWORDS", stats.passed_keywords.to_string()),
        ("FAILED_KEYWORDS", stats.failed_keywords.to_string()),
        ("SKIPPED_KEYWORDS", stats.skipped_keywords.to_string()),
        ("TOTAL_CRITICAL", stats.total_critical.to_string()),
        ("CRITICAL_PASSED", stats.critical_passed.to_string()),
        ("CRITICAL_FAILED", stats.critical_failed.to_string()),
        ("FAILURE_RATE", format!("{:.2}", stats.failure_rate)),
        ("SKIPPED_RATE", format!("{:.2}", stats.skipped_rate)),
        ("EXECUTION_TIME_MS", stats.execution_time_ms.to_string()),
    ]
}

/// Write the statistics of a run to `sink`.
///
/// # Errors
/// Returns an error if the sink cannot be written.
pub fn export_stats<S: KeyValueSink + ?Sized>(sink: &mut S, stats: &StatsResult) -> Result<()> {
    sink.write_pairs(&stats_to_pairs(stats))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
