//! Steps shared by the report-reading commands.

use std::fs;
use std::path::Path;

use crate::cli::{ColorChoice, ReportArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, RunSettings};
use crate::dispatch::{ReportProcessor, RunSummary};
use crate::output::{
    ColorMode, EnvFileSink, JsonFormatter, OutputFormat, OutputFormatter, RunReport,
    TextFormatter, export_stats,
};
use crate::scanner::locate_reports;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the filesystem, or the defaults with `no_config`.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Log level for `-v`/`-vv` when no explicit level was given.
const fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Command line and environment values take precedence over the file.
pub(crate) fn apply_report_overrides(config: &mut Config, args: &ReportArgs, verbose: u8) {
    if let Some(directory) = &args.report_directory {
        config.report.directory = Some(directory.clone());
    }
    if let Some(pattern) = &args.report_file_name_pattern
        && !pattern.is_empty()
    {
        config.report.file_name_pattern.clone_from(pattern);
    }
    if let Some(count_skipped) = args.count_skipped_tests {
        config.stats.count_skipped = count_skipped;
    }
    if let Some(only_critical) = args.only_critical {
        config.stats.only_critical = only_critical;
    }
    if args.parallel_traversal {
        config.stats.parallel_traversal = true;
    }
    if let Some(level) = args
        .log_level
        .as_deref()
        .or_else(|| verbosity_level(verbose))
    {
        config.log.level = Some(level.to_string());
    }
}

/// Locate the reports and fold them into one summary.
///
/// # Errors
/// Returns an error if no readable report matches or the worker pool cannot
/// be built.
pub(crate) fn collect_reports(
    settings: &RunSettings,
    jobs: Option<usize>,
) -> crate::Result<RunSummary> {
    let files = locate_reports(&settings.directory, &settings.file_name_pattern)?;
    let summary = ReportProcessor::new(settings.options).process_all_with_jobs(&files, jobs)?;

    if summary.files_processed == 0 {
        tracing::warn!("None of the {} report files could be processed", files.len());
    }

    Ok(summary)
}

/// Render a run in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub(crate) fn format_report(
    format: OutputFormat,
    report: &RunReport<'_>,
    color: ColorMode,
    verbose: u8,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

/// Append the statistics to the `DRONE_OUTPUT` file when it is configured.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub(crate) fn export_to_drone_output(summary: &RunSummary) -> crate::Result<()> {
    let Some(mut sink) = EnvFileSink::from_env() else {
        tracing::debug!("DRONE_OUTPUT not set; skipping statistics export");
        return Ok(());
    };

    export_stats(&mut sink, &summary.stats)?;
    tracing::debug!("Statistics written to {}", sink.path().display());
    Ok(())
}

/// Write to `output_path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
