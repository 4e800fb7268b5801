use std::fmt::Write;

use crate::checker::Verdict;
use crate::error::Result;
use crate::stats::{FailedTestDetail, StatsResult};

use super::{OutputFormatter, RunReport};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

const RULE: &str = "===============================================";
const SEPARATOR: &str = "-----------------------------------------------";

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// Colors a counter only when it is non-zero.
    fn count(&self, value: u64, color: &str) -> String {
        if value == 0 {
            return value.to_string();
        }
        self.colorize(&value.to_string(), color)
    }

    fn format_stats(&self, stats: &StatsResult, output: &mut String) {
        let _ = writeln!(output, "Total Test Suites: {}", stats.total_suites);
        let _ = writeln!(output, "Total Test Cases: {}", stats.total_tests);
        let _ = writeln!(
            output,
            "Passed Tests: {}",
            self.count(stats.passed_tests, ansi::GREEN)
        );
        let _ = writeln!(
            output,
            "Failed Tests: {}",
            self.count(stats.failed_tests, ansi::RED)
        );
        let _ = writeln!(
            output,
            "Skipped Tests: {}",
            self.count(stats.skipped_tests, ansi::YELLOW)
        );
        let _ = writeln!(output, "Critical Tests: {}", stats.total_critical);
        let _ = writeln!(output, "Critical Passed: {}", stats.critical_passed);
        let _ = writeln!(
            output,
            "Critical Failed: {}",
            self.count(stats.critical_failed, ansi::RED)
        );
        let _ = writeln!(output, "Total Keywords: {}", stats.total_keywords);
        let _ = writeln!(output, "Passed Keywords: {}", stats.passed_keywords);
        let _ = writeln!(output, "Failed Keywords: {}", stats.failed_keywords);
        let _ = writeln!(output, "Skipped Keywords: {}", stats.skipped_keywords);
        let _ = writeln!(output, "Failure Rate: {:.2}%", stats.failure_rate);
        let _ = writeln!(output, "Skipped Rate: {:.2}%", stats.skipped_rate);
        let _ = writeln!(
            output,
            "Total Execution Time: {} ms",
            stats.execution_time_ms
        );
        if self.verbose >= 1 || stats.unparseable_timestamps > 0 {
            let _ = writeln!(
                output,
                "Unparseable Timestamps: {}",
                stats.unparseable_timestamps
            );
        }
    }

    fn format_failed_tests(details: &[FailedTestDetail], output: &mut String) {
        let mut sorted: Vec<_> = details.iter().collect();
        sorted.sort();

        let _ = writeln!(output, "\nFailed Test Details:");
        let _ = writeln!(output, "{SEPARATOR}");
        for (i, test) in sorted.iter().enumerate() {
            let _ = writeln!(output, "{}. Test Name: {}", i + 1, test.name);
            let _ = writeln!(output, "   Suite: {}", test.suite);
            let _ = writeln!(output, "   Status: {}", test.status);
            let _ = writeln!(output, "   Error Message: {}", test.error_message);
            let _ = writeln!(output, "{SEPARATOR}");
        }
    }

    fn format_verdict(&self, verdict: Verdict) -> String {
        match verdict {
            Verdict::Pass => format!(
                "✓ {}: failed tests within thresholds",
                self.colorize(verdict.label(), ansi::GREEN)
            ),
            Verdict::Unstable { failed, threshold } => format!(
                "⚠ {}: failed tests count ({failed}) exceeds the unstable threshold ({threshold})",
                self.colorize(verdict.label(), ansi::YELLOW)
            ),
            Verdict::Fail { failed, threshold } => format!(
                "✗ {}: failed tests count ({failed}) exceeds the pass threshold ({threshold})",
                self.colorize(verdict.label(), ansi::RED)
            ),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport<'_>) -> Result<String> {
        let summary = report.summary;
        let mut output = String::new();

        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(output, "Robot Framework Test Report Summary");
        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(
            output,
            "Files Processed: {} ({} empty, {} failed)",
            summary.files_processed,
            summary.empty_files,
            summary.failed_files.len()
        );
        self.format_stats(&summary.stats, &mut output);
        let _ = writeln!(output, "{RULE}");

        if !summary.stats.failed_tests_details.is_empty() {
            Self::format_failed_tests(&summary.stats.failed_tests_details, &mut output);
        }

        if !summary.failed_files.is_empty() {
            let _ = writeln!(output, "\nUnprocessed Files:");
            for failure in &summary.failed_files {
                let _ = writeln!(
                    output,
                    "✗ {}: {}",
                    failure.path.display(),
                    failure.reason
                );
            }
        }

        if let Some(verdict) = report.verdict {
            let _ = writeln!(output, "\n{}", self.format_verdict(verdict));
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
