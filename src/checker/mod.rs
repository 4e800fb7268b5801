mod threshold;

pub use threshold::{ThresholdValidator, Thresholds, Verdict};

use crate::stats::StatsResult;

pub trait Checker {
    /// Decide the run outcome for merged statistics.
    fn check(&self, stats: &StatsResult) -> Verdict;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
