use crate::cli::{Cli, StatsArgs};
use crate::config::validate;
use crate::dispatch::RunSummary;
use crate::output::RunReport;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, logging};

use super::context::{
    apply_report_overrides, collect_reports, color_choice_to_mode, export_to_drone_output,
    format_report, load_config, write_output,
};

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Aggregate every matching report without evaluating thresholds.
///
/// # Errors
/// Returns an error on invalid configuration, when no report can be read, or
/// when output cannot be written.
pub fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> Result<RunSummary> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_report_overrides(&mut config, &args.report, cli.verbose);
    logging::init(config.log.level.as_deref(), cli.quiet);

    let settings = validate(&config)?;
    let summary = collect_reports(&settings, args.report.jobs)?;

    let output = format_report(
        args.report.format,
        &RunReport::new(&summary, None),
        color_choice_to_mode(cli.color),
        cli.verbose,
    )?;
    write_output(args.report.output.as_deref(), &output, cli.quiet)?;
    export_to_drone_output(&summary)?;

    Ok(summary)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
