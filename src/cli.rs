use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "robot-guard")]
#[command(
    author,
    version,
    about = "Aggregate Robot Framework reports and gate CI runs on failed tests"
)]
#[command(long_about = "Aggregates Robot Framework output.xml reports and compares \
    the number of failed tests against pass and unstable thresholds.\n\n\
    Exit codes:\n  \
    0 - Passed (or unstable)\n  \
    1 - Failed tests exceed the pass threshold\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate reports and check failed tests against thresholds
    Check(CheckArgs),

    /// Aggregate reports without checking thresholds
    Stats(StatsArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by every command that reads reports. Each one overrides
/// the configuration file and can also be set through the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Directory to search for report files
    #[arg(long, env = "PLUGIN_REPORT_DIRECTORY")]
    pub report_directory: Option<PathBuf>,

    /// Glob over paths relative to the report directory [default: *.xml]
    #[arg(long, env = "PLUGIN_REPORT_FILE_NAME_PATTERN")]
    pub report_file_name_pattern: Option<String>,

    /// Count skipped tests in the skipped counter
    #[arg(long, env = "PLUGIN_COUNT_SKIPPED_TESTS", num_args = 0..=1, default_missing_value = "true")]
    pub count_skipped_tests: Option<bool>,

    /// Only count tests marked critical
    #[arg(long, env = "PLUGIN_ONLY_CRITICAL", num_args = 0..=1, default_missing_value = "true")]
    pub only_critical: Option<bool>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "PLUGIN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Also parallelize inside each report, over tests and sub-suites
    #[arg(long)]
    pub parallel_traversal: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Fail when more tests than this fail
    #[arg(long, env = "PLUGIN_PASS_THRESHOLD", allow_negative_numbers = true)]
    pub pass_threshold: Option<i64>,

    /// Mark the run unstable when more tests than this fail
    #[arg(long, env = "PLUGIN_UNSTABLE_THRESHOLD", allow_negative_numbers = true)]
    pub unstable_threshold: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Output format for `config show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file
        #[arg(default_value = LOCAL_CONFIG_NAME)]
        path: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
