use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_check_defaults() {
    let cli = Cli::parse_from(["robot-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.report.report_directory.is_none());
            assert!(args.report.report_file_name_pattern.is_none());
            assert!(args.report.count_skipped_tests.is_none());
            assert!(args.report.only_critical.is_none());
            assert_eq!(args.report.format, OutputFormat::Text);
            assert!(args.pass_threshold.is_none());
            assert!(args.unstable_threshold.is_none());
            assert!(!args.report.parallel_traversal);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_report_options() {
    let cli = Cli::parse_from([
        "robot-guard",
        "check",
        "--report-directory",
        "results",
        "--report-file-name-pattern",
        "output-*.xml",
        "--pass-threshold",
        "3",
        "--unstable-threshold",
        "1",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.report.report_directory, Some(PathBuf::from("results")));
            assert_eq!(
                args.report.report_file_name_pattern.as_deref(),
                Some("output-*.xml")
            );
            assert_eq!(args.pass_threshold, Some(3));
            assert_eq!(args.unstable_threshold, Some(1));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_accepts_negative_threshold() {
    let cli = Cli::parse_from(["robot-guard", "check", "--pass-threshold", "-1"]);
    match cli.command {
        Commands::Check(args) => assert_eq!(args.pass_threshold, Some(-1)),
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_bool_flags_without_value_mean_true() {
    let cli = Cli::parse_from([
        "robot-guard",
        "stats",
        "--count-skipped-tests",
        "--only-critical",
    ]);
    match cli.command {
        Commands::Stats(args) => {
            assert_eq!(args.report.count_skipped_tests, Some(true));
            assert_eq!(args.report.only_critical, Some(true));
        }
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn cli_bool_flags_accept_explicit_false() {
    let cli = Cli::parse_from(["robot-guard", "stats", "--count-skipped-tests=false"]);
    match cli.command {
        Commands::Stats(args) => assert_eq!(args.report.count_skipped_tests, Some(false)),
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn cli_stats_with_format_output_and_jobs() {
    let cli = Cli::parse_from([
        "robot-guard",
        "stats",
        "--format",
        "json",
        "--output",
        "summary.json",
        "--jobs",
        "4",
        "--parallel-traversal",
    ]);
    match cli.command {
        Commands::Stats(args) => {
            assert_eq!(args.report.format, OutputFormat::Json);
            assert_eq!(args.report.output, Some(PathBuf::from("summary.json")));
            assert_eq!(args.report.jobs, Some(4));
            assert!(args.report.parallel_traversal);
        }
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn cli_rejects_unknown_format() {
    let result = Cli::try_parse_from(["robot-guard", "stats", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_options_after_subcommand() {
    let cli = Cli::parse_from([
        "robot-guard",
        "check",
        "--config",
        "ci.toml",
        "--color",
        "never",
        "-q",
        "-vv",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.quiet);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_config_conflicts_with_no_config() {
    let result = Cli::try_parse_from(["robot-guard", "--config", "a.toml", "--no-config", "stats"]);
    assert!(result.is_err());
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["robot-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".robot-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate_path() {
    let cli = Cli::parse_from(["robot-guard", "config", "validate", "ci.toml"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { path },
        }) => assert_eq!(path, PathBuf::from("ci.toml")),
        _ => panic!("Expected config validate"),
    }
}

#[test]
fn cli_config_show_json() {
    let cli = Cli::parse_from(["robot-guard", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { format },
        }) => assert_eq!(format, ConfigOutputFormat::Json),
        _ => panic!("Expected config show"),
    }
}
