use serde::Serialize;

use crate::report::Test;

use super::timing::Elapsed;

/// Details of one failed test, kept for the summary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FailedTestDetail {
    pub name: String,
    pub suite: String,
    pub status: String,
    pub error_message: String,
}

impl FailedTestDetail {
    #[must_use]
    pub fn from_test(test: &Test) -> Self {
        Self {
            name: test.name.clone(),
            suite: test.suite.clone(),
            status: test.outcome.label().to_string(),
            error_message: test.last_error_message().to_string(),
        }
    }
}

/// Aggregated statistics of one report file or of a whole run.
///
/// Counters only ever grow. `failure_rate` and `skipped_rate` are derived
/// from the raw counts and recomputed after every merge, never averaged.
/// The order of `failed_tests_details` carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsResult {
    pub total_suites: u64,
    pub total_tests: u64,
    pub passed_tests: u64,
    pub failed_tests: u64,
    pub skipped_tests: u64,
    pub total_keywords: u64,
    pub passed_keywords: u64,
    pub failed_keywords: u64,
    pub skipped_keywords: u64,
    pub total_critical: u64,
    pub critical_passed: u64,
    pub critical_failed: u64,
    pub execution_time_ms: u64,
    pub failure_rate: f64,
    pub skipped_rate: f64,
    /// Nodes whose timestamps were present but could not be used.
    pub unparseable_timestamps: u64,
    pub failed_tests_details: Vec<FailedTestDetail>,
}

impl StatsResult {
    /// Fold `other` into `self`.
    ///
    /// Associative and commutative on every counter and rate;
    /// `StatsResult::default()` is the identity.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.total_suites += other.total_suites;
        self.total_tests += other.total_tests;
        self.passed_tests += other.passed_tests;
        self.failed_tests += other.failed_tests;
        self.skipped_tests += other.skipped_tests;
        self.total_keywords += other.total_keywords;
        self.passed_keywords += other.passed_keywords;
        self.failed_keywords += other.failed_keywords;
        self.skipped_keywords += other.skipped_keywords;
        self.total_critical += other.total_critical;
        self.critical_passed += other.critical_passed;
        self.critical_failed += other.critical_failed;
        self.execution_time_ms += other.execution_time_ms;
        self.unparseable_timestamps += other.unparseable_timestamps;
        self.failed_tests_details.extend(other.failed_tests_details);
        self.refresh_rates();
        self
    }

    #[must_use]
    pub fn merge_all<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        results.into_iter().fold(Self::default(), Self::merge)
    }

    /// Recompute both rates from the current raw counts.
    pub fn refresh_rates(&mut self) {
        self.failure_rate = percentage(self.failed_tests, self.total_tests);
        self.skipped_rate = percentage(self.skipped_tests, self.total_tests);
    }

    pub fn add_elapsed(&mut self, elapsed: Elapsed) {
        match elapsed {
            Elapsed::Millis(ms) => self.execution_time_ms += ms,
            Elapsed::Invalid => self.unparseable_timestamps += 1,
            Elapsed::Absent => {}
        }
    }

    /// True when nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `part` as a percentage of `total`; `0.0` when `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Counts far below 2^52
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64) * 100.0
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
