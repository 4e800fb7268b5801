use crate::checker::{Checker, ThresholdValidator, Verdict};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate};
use crate::output::RunReport;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED, Result, logging};

use super::context::{
    apply_report_overrides, collect_reports, color_choice_to_mode, export_to_drone_output,
    format_report, load_config, write_output,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(verdict) => {
            tracing::debug!("Run finished with verdict {}", verdict.label());
            EXIT_SUCCESS
        }
        Err(e) if e.is_threshold_exceeded() => {
            eprintln!("Error: {e}");
            EXIT_THRESHOLD_EXCEEDED
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Aggregate every matching report and decide the run against its
/// thresholds. Statistics are written out before the decision, so a failing
/// run still exports them; an export error never masks a `Fail` verdict.
///
/// # Errors
/// Returns an error on invalid configuration, when no report can be read,
/// when output cannot be written, or when failed tests exceed the pass
/// threshold.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<Verdict> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_check_overrides(&mut config, args, cli.verbose);
    logging::init(config.log.level.as_deref(), cli.quiet);

    let settings = validate(&config)?;
    let summary = collect_reports(&settings, args.report.jobs)?;

    let verdict = ThresholdValidator::new(settings.thresholds).check(&summary.stats);
    if let Verdict::Unstable { failed, threshold } = verdict {
        tracing::warn!(
            "Warning: failed tests count ({failed}) exceeds the unstable threshold ({threshold})"
        );
    }

    let output = format_report(
        args.report.format,
        &RunReport::new(&summary, Some(verdict)),
        color_choice_to_mode(cli.color),
        cli.verbose,
    )?;
    write_output(args.report.output.as_deref(), &output, cli.quiet)?;
    if let Err(e) = export_to_drone_output(&summary) {
        if !verdict.is_fail() {
            return Err(e);
        }
        tracing::error!("{e}");
    }

    verdict.into_result()
}

fn apply_check_overrides(config: &mut Config, args: &CheckArgs, verbose: u8) {
    apply_report_overrides(config, &args.report, verbose);
    if let Some(pass) = args.pass_threshold {
        config.thresholds.pass = pass;
    }
    if let Some(unstable) = args.unstable_threshold {
        config.thresholds.unstable = unstable;
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
