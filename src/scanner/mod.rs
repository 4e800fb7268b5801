mod filter;

pub use filter::{DEFAULT_PATTERN, FileFilter, PatternFilter};

use std::fs::File;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, RobotGuardError};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    max_depth: Option<usize>,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            max_depth: None,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut walker = WalkDir::new(root).sort_by_file_name();
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        walker
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .strip_prefix(root)
                    .is_ok_and(|relative| self.filter.should_include(relative))
            })
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

/// Find the readable report files under `directory` matching `pattern`.
///
/// Unreadable matches are logged and skipped.
///
/// # Errors
/// Returns an error if the pattern is invalid, nothing matches, or no match
/// can be opened for reading.
pub fn locate_reports(directory: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let filter = PatternFilter::new(pattern)?;
    let max_depth = filter.max_depth();
    let matches = DirectoryScanner::new(filter)
        .with_max_depth(max_depth)
        .scan(directory)?;

    tracing::info!(
        "Found {} files matching the pattern: {pattern}",
        matches.len()
    );

    if matches.is_empty() {
        return Err(RobotGuardError::NoReportsFound {
            directory: directory.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    let readable: Vec<_> = matches
        .into_iter()
        .filter(|path| match File::open(path) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("File found but not readable: {}: {e}", path.display());
                false
            }
        })
        .collect();

    tracing::info!("Number of readable files: {}", readable.len());

    if readable.is_empty() {
        return Err(RobotGuardError::NoReadableReports {
            directory: directory.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    Ok(readable)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
