//! Turns a loaded [`Config`] into the settings a run needs, rejecting values
//! the core cannot work with.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::checker::Thresholds;
use crate::config::Config;
use crate::scanner::PatternFilter;
use crate::stats::StatsOptions;
use crate::{Result, RobotGuardError};

/// Validated inputs of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub directory: PathBuf,
    pub file_name_pattern: String,
    pub thresholds: Thresholds,
    pub options: StatsOptions,
}

/// Validates a configuration and converts it into [`RunSettings`].
///
/// # Errors
/// Returns an error if the report directory is missing, a threshold is
/// negative, the file name pattern is not a valid glob, or the log level is
/// unknown.
pub fn validate(config: &Config) -> Result<RunSettings> {
    validate_config_semantics(config)?;

    let directory = config
        .report
        .directory
        .clone()
        .filter(|dir| !dir.as_os_str().is_empty())
        .ok_or_else(|| RobotGuardError::Config("report directory is required".to_string()))?;

    Ok(RunSettings {
        directory,
        file_name_pattern: config.report.file_name_pattern.clone(),
        thresholds: thresholds(config)?,
        options: StatsOptions {
            only_critical: config.stats.only_critical,
            count_skipped: config.stats.count_skipped,
            parallel: config.stats.parallel_traversal,
        },
    })
}

/// Checks everything except the presence of the report directory, which may
/// still come from the command line.
///
/// # Errors
/// Returns an error if a threshold is negative, the file name pattern is not
/// a valid glob, or the log level is unknown.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    thresholds(config)?;
    PatternFilter::new(&config.report.file_name_pattern)?;

    if let Some(level) = &config.log.level {
        LevelFilter::from_str(level).map_err(|_| {
            RobotGuardError::Config(format!(
                "log.level has invalid value '{level}'. Valid values: off, error, warn, info, debug, trace"
            ))
        })?;
    }

    Ok(())
}

fn thresholds(config: &Config) -> Result<Thresholds> {
    let pass = u64::try_from(config.thresholds.pass);
    let unstable = u64::try_from(config.thresholds.unstable);
    let (Ok(pass), Ok(unstable)) = (pass, unstable) else {
        return Err(RobotGuardError::Config(
            "threshold values must be non-negative".to_string(),
        ));
    };

    let thresholds = Thresholds { pass, unstable };
    if !thresholds.allows_unstable() {
        tracing::debug!(
            pass,
            unstable,
            "Unstable threshold not below pass threshold; runs can never be unstable"
        );
    }

    Ok(thresholds)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
