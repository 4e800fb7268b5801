use serde::Serialize;

use crate::error::{Result, RobotGuardError};
use crate::stats::StatsResult;

use super::Checker;

/// Failure-count ceilings, already validated as non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    /// More failures than this fails the run.
    pub pass: u64,
    /// More failures than this (but within `pass`) marks the run unstable.
    pub unstable: u64,
}

impl Thresholds {
    /// False when every count above `unstable` also exceeds `pass`.
    #[must_use]
    pub const fn allows_unstable(&self) -> bool {
        self.unstable < self.pass
    }
}

/// Outcome of a run against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Unstable { failed: u64, threshold: u64 },
    Fail { failed: u64, threshold: u64 },
}

impl Verdict {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub const fn is_unstable(&self) -> bool {
        matches!(self, Self::Unstable { .. })
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Unstable { .. } => "UNSTABLE",
            Self::Fail { .. } => "FAIL",
        }
    }

    /// `Fail` becomes [`RobotGuardError::ThresholdExceeded`]; `Pass` and
    /// `Unstable` are returned unchanged.
    ///
    /// # Errors
    /// Returns an error if the verdict is `Fail`.
    pub fn into_result(self) -> Result<Self> {
        match self {
            Self::Fail { failed, threshold } => {
                Err(RobotGuardError::ThresholdExceeded { failed, threshold })
            }
            other => Ok(other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdValidator {
    thresholds: Thresholds,
}

impl ThresholdValidator {
    #[must_use]
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// The pass ceiling is checked first, so with `unstable >= pass` the
    /// unstable branch is unreachable.
    #[must_use]
    pub const fn validate_failures(&self, failed: u64) -> Verdict {
        if failed > self.thresholds.pass {
            Verdict::Fail {
                failed,
                threshold: self.thresholds.pass,
            }
        } else if failed > self.thresholds.unstable {
            Verdict::Unstable {
                failed,
                threshold: self.thresholds.unstable,
            }
        } else {
            Verdict::Pass
        }
    }
}

impl Checker for ThresholdValidator {
    fn check(&self, stats: &StatsResult) -> Verdict {
        self.validate_failures(stats.failed_tests)
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
