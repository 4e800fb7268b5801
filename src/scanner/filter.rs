use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{Result, RobotGuardError};

/// Default report file name pattern.
pub const DEFAULT_PATTERN: &str = "*.xml";

pub trait FileFilter {
    /// Decide on a path relative to the scanned root.
    fn should_include(&self, relative: &Path) -> bool;
}

/// Matches report files by a glob over their path relative to the report
/// directory. `*` does not cross directory separators; use `**` to descend.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    pattern: String,
    matcher: GlobMatcher,
}

impl PatternFilter {
    /// Compile a file name pattern.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid glob.
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| RobotGuardError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// How deep below the root a match can sit, or `None` when the pattern
    /// uses `**`.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        if self.pattern.contains("**") {
            return None;
        }
        Some(
            self.pattern
                .split(['/', '\\'])
                .filter(|part| !part.is_empty())
                .count()
                .max(1),
        )
    }
}

impl FileFilter for PatternFilter {
    fn should_include(&self, relative: &Path) -> bool {
        self.matcher.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
