use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, parse_config, validate_config_semantics};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, RobotGuardError};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { path } => run_config_validate(path),
        ConfigAction::Show { format } => run_config_show(*format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// The report directory is not required here; it may come from the command
/// line at run time.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(RobotGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config = parse_config(&content)?;
    validate_config_semantics(&config)
}

fn run_config_show(format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(format: ConfigOutputFormat, cli: &Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[report]\n");
    match &config.report.directory {
        Some(directory) => {
            let _ = writeln!(output, "  directory = \"{}\"", directory.display());
        }
        None => output.push_str("  directory = (not set)\n"),
    }
    let _ = writeln!(
        output,
        "  file_name_pattern = \"{}\"",
        config.report.file_name_pattern
    );

    output.push_str("\n[thresholds]\n");
    let _ = writeln!(output, "  pass = {}", config.thresholds.pass);
    let _ = writeln!(output, "  unstable = {}", config.thresholds.unstable);

    output.push_str("\n[stats]\n");
    let _ = writeln!(output, "  count_skipped = {}", config.stats.count_skipped);
    let _ = writeln!(output, "  only_critical = {}", config.stats.only_critical);
    let _ = writeln!(
        output,
        "  parallel_traversal = {}",
        config.stats.parallel_traversal
    );

    if let Some(level) = &config.log.level {
        output.push_str("\n[log]\n");
        let _ = writeln!(output, "  level = \"{level}\"");
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
