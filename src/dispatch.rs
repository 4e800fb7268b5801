//! Per-file fan-out: read, parse and compute every report concurrently, then
//! reduce the isolated results into one run summary.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Result, RobotGuardError};
use crate::report::parse_report;
use crate::stats::{StatsEngine, StatsOptions, StatsResult};

/// Statistics of one successfully processed file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub stats: StatsResult,
    /// The file was blank or its tree held no tests and no sub-suites.
    pub empty: bool,
}

/// A file whose processing failed and contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Merged outcome of processing a batch of files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub stats: StatsResult,
    pub files_processed: usize,
    pub empty_files: usize,
    pub failed_files: Vec<FileFailure>,
}

impl RunSummary {
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.stats = self.stats.merge(other.stats);
        self.files_processed += other.files_processed;
        self.empty_files += other.empty_files;
        self.failed_files.extend(other.failed_files);
        self
    }

    fn from_report(report: FileReport) -> Self {
        Self {
            stats: report.stats,
            files_processed: 1,
            empty_files: usize::from(report.empty),
            failed_files: Vec::new(),
        }
    }

    fn from_failure(failure: FileFailure) -> Self {
        Self {
            failed_files: vec![failure],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportProcessor {
    engine: StatsEngine,
}

impl ReportProcessor {
    #[must_use]
    pub const fn new(options: StatsOptions) -> Self {
        Self {
            engine: StatsEngine::new(options),
        }
    }

    /// Read, parse and compute one report file.
    ///
    /// Blank files and trees without tests or sub-suites yield the zero
    /// result.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid report.
    pub fn process_file(&self, path: &Path) -> Result<FileReport> {
        tracing::info!("Processing file: {}", path.display());

        let bytes = fs::read(path).map_err(|source| RobotGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let tree = parse_report(&bytes).map_err(|source| RobotGuardError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(tree) = tree.filter(|tree| !tree.is_empty()) else {
            tracing::warn!("Skipping report with no tests: {}", path.display());
            return Ok(FileReport {
                path: path.to_path_buf(),
                stats: StatsResult::default(),
                empty: true,
            });
        };

        for error in &tree.errors {
            tracing::debug!(file = %path.display(), "Execution error in report: {error}");
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            stats: self.engine.compute(&tree),
            empty: false,
        })
    }

    /// Process every file in parallel. A failing file is logged, recorded in
    /// [`RunSummary::failed_files`] and contributes nothing; it never stops
    /// the other files.
    #[must_use]
    pub fn process_all(&self, files: &[PathBuf]) -> RunSummary {
        let mut summary = files
            .par_iter()
            .map(|path| match self.process_file(path) {
                Ok(report) => RunSummary::from_report(report),
                Err(e) => {
                    tracing::warn!("Failed to process file {}: {e}", path.display());
                    RunSummary::from_failure(FileFailure {
                        path: path.clone(),
                        reason: error_chain(&e),
                    })
                }
            })
            .reduce(RunSummary::default, RunSummary::merge);

        summary.failed_files.sort_by(|a, b| a.path.cmp(&b.path));
        summary
    }

    /// Like [`Self::process_all`], on a dedicated pool of `jobs` threads when
    /// given.
    ///
    /// # Errors
    /// Returns an error if the thread pool cannot be built.
    pub fn process_all_with_jobs(
        &self,
        files: &[PathBuf],
        jobs: Option<usize>,
    ) -> Result<RunSummary> {
        let Some(jobs) = jobs else {
            return Ok(self.process_all(files));
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| RobotGuardError::Config(format!("Cannot start {jobs} workers: {e}")))?;
        Ok(pool.install(|| self.process_all(files)))
    }
}

/// Error message followed by each of its sources, joined with `: `.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
