use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scanner::DEFAULT_PATTERN;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Where to look for report files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory searched for reports. Required before a run, from the
    /// config file or the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Glob over paths relative to `directory` (default: `*.xml`).
    #[serde(default = "default_file_name_pattern")]
    pub file_name_pattern: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name_pattern: default_file_name_pattern(),
        }
    }
}

/// Failure-count ceilings.
///
/// Signed so that negative input can be reported instead of rejected by the
/// TOML parser.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// More failed tests than this fails the run.
    #[serde(default)]
    pub pass: i64,

    /// More failed tests than this (but within `pass`) marks the run unstable.
    #[serde(default)]
    pub unstable: i64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsConfig {
    /// Count SKIP tests in the skipped counter.
    #[serde(default)]
    pub count_skipped: bool,

    /// Ignore non-critical tests entirely.
    #[serde(default)]
    pub only_critical: bool,

    /// Fan out inside each report over tests and sub-suites.
    #[serde(default)]
    pub parallel_traversal: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Contents of a `.robot-guard.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub thresholds: ThresholdConfig,

    #[serde(default)]
    pub stats: StatsConfig,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_file_name_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
