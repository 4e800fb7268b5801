use rayon::prelude::*;

use crate::report::{Keyword, Outcome, ReportTree, Suite, Test};

use super::result::{FailedTestDetail, StatsResult};
use super::timing::{Elapsed, elapsed};

/// Flags controlling which tests are counted and how the tree is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsOptions {
    /// Drop non-critical tests from every counter.
    pub only_critical: bool,
    /// Count SKIP tests in `skipped_tests`. Skipped tests always stay in
    /// `total_tests`.
    pub count_skipped: bool,
    /// Fan out over sibling tests and sub-suites on the rayon pool.
    pub parallel: bool,
}

/// Walks a report tree and produces its [`StatsResult`].
///
/// Pure with respect to its input. Both traversal modes yield identical
/// counters; only the order of `failed_tests_details` may differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsEngine {
    options: StatsOptions,
}

impl StatsEngine {
    #[must_use]
    pub const fn new(options: StatsOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> StatsOptions {
        self.options
    }

    /// Statistics of the whole tree; a root without tests or sub-suites
    /// yields the zero result, its own timing included.
    #[must_use]
    pub fn compute(&self, tree: &ReportTree) -> StatsResult {
        if tree.is_empty() {
            return StatsResult::default();
        }
        self.compute_suite(&tree.suite)
    }

    #[must_use]
    pub fn compute_suite(&self, suite: &Suite) -> StatsResult {
        let mut stats = if self.options.parallel {
            self.suite_parallel(suite)
        } else {
            let mut stats = StatsResult::default();
            self.fold_suite(suite, &mut stats);
            stats
        };
        stats.refresh_rates();
        stats
    }

    fn fold_suite(&self, suite: &Suite, stats: &mut StatsResult) {
        Self::fold_suite_own(suite, stats);

        for test in &suite.tests {
            self.fold_test(test, stats);
        }
        for child in &suite.suites {
            self.fold_suite(child, stats);
        }
    }

    /// Each sibling test and sub-suite yields an isolated result; the
    /// results are combined with [`StatsResult::merge`].
    fn suite_parallel(&self, suite: &Suite) -> StatsResult {
        let mut own = StatsResult::default();
        Self::fold_suite_own(suite, &mut own);

        let (tests, children) = rayon::join(
            || {
                suite
                    .tests
                    .par_iter()
                    .map(|test| {
                        let mut stats = StatsResult::default();
                        self.fold_test(test, &mut stats);
                        stats
                    })
                    .reduce(StatsResult::default, StatsResult::merge)
            },
            || {
                suite
                    .suites
                    .par_iter()
                    .map(|child| self.suite_parallel(child))
                    .reduce(StatsResult::default, StatsResult::merge)
            },
        );

        own.merge(tests).merge(children)
    }

    /// The suite's own contribution: its count and its elapsed time.
    fn fold_suite_own(suite: &Suite, stats: &mut StatsResult) {
        if suite.has_content() {
            stats.total_suites += 1;
        }
        stats.add_elapsed(suite.timing().map_or(Elapsed::Absent, elapsed));
    }

    fn fold_test(&self, test: &Test, stats: &mut StatsResult) {
        if self.options.only_critical && !test.critical {
            return;
        }

        stats.total_tests += 1;
        if test.critical {
            stats.total_critical += 1;
        }
        stats.add_elapsed(elapsed(&test.timing));

        match test.outcome {
            Outcome::Pass => {
                stats.passed_tests += 1;
                if test.critical {
                    stats.critical_passed += 1;
                }
            }
            Outcome::Fail => {
                stats.failed_tests += 1;
                if test.critical {
                    stats.critical_failed += 1;
                }
                stats
                    .failed_tests_details
                    .push(FailedTestDetail::from_test(test));
            }
            // Without count_skipped the test stays in total_tests but lands in
            // no outcome bucket.
            Outcome::Skip => {
                if self.options.count_skipped {
                    stats.skipped_tests += 1;
                }
            }
        }

        fold_keywords(&test.keywords, stats);
    }
}

/// Counts every keyword below `keywords`, at any depth.
fn fold_keywords(keywords: &[Keyword], stats: &mut StatsResult) {
    let mut pending: Vec<&Keyword> = keywords.iter().collect();

    while let Some(keyword) = pending.pop() {
        stats.total_keywords += 1;
        match keyword.outcome {
            Outcome::Pass => stats.passed_keywords += 1,
            Outcome::Fail => stats.failed_keywords += 1,
            Outcome::Skip => stats.skipped_keywords += 1,
        }
        pending.extend(&keyword.keywords);
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
