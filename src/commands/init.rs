use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, RobotGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RobotGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# robot-guard configuration file
version = "1"

[report]
# Directory searched for Robot Framework output files (required here or via
# --report-directory / PLUGIN_REPORT_DIRECTORY)
directory = "reports"

# Glob over paths relative to the directory; use "**/output.xml" to descend
file_name_pattern = "*.xml"

[thresholds]
# Fail the run when more tests than this fail
pass = 0

# Mark the run unstable when more tests than this fail
unstable = 0

[stats]
# Count skipped tests in the skipped counter and rate
count_skipped = false

# Ignore tests not marked critical
only_critical = false

# Also parallelize inside each report (large reports only)
parallel_traversal = false

[log]
# error, warn, info, debug or trace (RUST_LOG takes precedence)
level = "info"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
