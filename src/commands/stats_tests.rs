use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

const REPORT: &str = include_str!("../../tests/fixtures/robot_report.xml");
const NESTED: &str = include_str!("../../tests/fixtures/nested_report.xml");

fn parse(dir: &TempDir, extra: &[&str]) -> Cli {
    let directory = dir.path().to_string_lossy().to_string();
    let mut argv = vec![
        "robot-guard",
        "--no-config",
        "-q",
        "stats",
        "--report-directory",
        directory.as_str(),
    ];
    argv.extend_from_slice(extra);
    Cli::parse_from(argv)
}

fn stats(cli: &Cli) -> Result<RunSummary> {
    match &cli.command {
        Commands::Stats(args) => run_stats_impl(args, cli),
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn stats_ignores_thresholds() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.xml"), REPORT).unwrap();

    let summary = stats(&parse(&dir, &[])).unwrap();

    assert_eq!(summary.stats.failed_tests, 2);
    assert_eq!(summary.files_processed, 1);
}

#[test]
fn stats_merges_nested_directories_with_globstar() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("run1")).unwrap();
    std::fs::create_dir_all(dir.path().join("run2")).unwrap();
    std::fs::write(dir.path().join("run1").join("output.xml"), REPORT).unwrap();
    std::fs::write(dir.path().join("run2").join("output.xml"), NESTED).unwrap();

    let summary = stats(&parse(
        &dir,
        &[
            "--report-file-name-pattern",
            "**/output.xml",
            "--count-skipped-tests",
            "--parallel-traversal",
        ],
    ))
    .unwrap();

    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.stats.total_tests, 7);
    assert_eq!(summary.stats.skipped_tests, 1);
    assert_eq!(summary.stats.total_suites, 4);
}

#[test]
fn malformed_file_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.xml"), REPORT).unwrap();
    std::fs::write(dir.path().join("b.xml"), "<robot><suite").unwrap();

    let summary = stats(&parse(&dir, &[])).unwrap();

    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.failed_files.len(), 1);
    assert_eq!(summary.stats.total_tests, 4);
}

#[test]
fn run_stats_exit_codes() {
    let dir = TempDir::new().unwrap();
    let empty = parse(&dir, &[]);
    let Commands::Stats(args) = &empty.command else {
        panic!("Expected Stats command");
    };
    assert_eq!(run_stats(args, &empty), EXIT_CONFIG_ERROR);

    std::fs::write(dir.path().join("a.xml"), REPORT).unwrap();
    let cli = parse(&dir, &[]);
    let Commands::Stats(args) = &cli.command else {
        panic!("Expected Stats command");
    };
    assert_eq!(run_stats(args, &cli), EXIT_SUCCESS);
}
