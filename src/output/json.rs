use std::path::PathBuf;

use serde::Serialize;

use crate::checker::Verdict;
use crate::error::Result;
use crate::stats::StatsResult;

use super::{OutputFormatter, RunReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: FilesSummary<'a>,
    stats: &'a StatsResult,
    verdict: Option<Verdict>,
}

#[derive(Serialize)]
struct FilesSummary<'a> {
    processed: usize,
    empty: usize,
    failed: Vec<FailedFile<'a>>,
}

#[derive(Serialize)]
struct FailedFile<'a> {
    path: &'a PathBuf,
    reason: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport<'_>) -> Result<String> {
        let summary = report.summary;
        let output = JsonOutput {
            files: FilesSummary {
                processed: summary.files_processed,
                empty: summary.empty_files,
                failed: summary
                    .failed_files
                    .iter()
                    .map(|failure| FailedFile {
                        path: &failure.path,
                        reason: &failure.reason,
                    })
                    .collect(),
            },
            stats: &summary.stats,
            verdict: report.verdict,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
