mod env;
mod json;
mod text;

pub use env::{DRONE_OUTPUT_VAR, EnvFileSink, KeyValueSink, export_stats, stats_to_pairs};
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::Verdict;
use crate::dispatch::RunSummary;
use crate::error::Result;

/// Everything a formatter renders: the merged run and, when thresholds were
/// evaluated, the verdict.
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    pub summary: &'a RunSummary,
    pub verdict: Option<Verdict>,
}

impl<'a> RunReport<'a> {
    #[must_use]
    pub const fn new(summary: &'a RunSummary, verdict: Option<Verdict>) -> Self {
        Self { summary, verdict }
    }
}

/// Trait for formatting a run into various output formats.
pub trait OutputFormatter {
    /// Format the run into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &RunReport<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
