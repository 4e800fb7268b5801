use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[test]
fn scanner_finds_files_in_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/output.xml", "<robot/>");
    write(temp_dir.path(), "b/c/output.xml", "<robot/>");

    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn scanner_respects_max_depth() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "top.xml", "");
    write(temp_dir.path(), "nested/deep.xml", "");

    let files = DirectoryScanner::new(AcceptAllFilter)
        .with_max_depth(Some(1))
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("top.xml"));
}

#[test]
fn scanner_returns_sorted_paths() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "b.xml", "");
    write(temp_dir.path(), "a.xml", "");
    write(temp_dir.path(), "c.xml", "");

    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["a.xml", "b.xml", "c.xml"]);
}

#[test]
fn locate_reports_matches_exact_name() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "robot_report.xml", "<robot/>");
    write(temp_dir.path(), "other.xml", "<robot/>");

    let files = locate_reports(temp_dir.path(), "robot_report.xml").unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("robot_report.xml"));
}

#[test]
fn locate_reports_with_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "robot_report.xml", "<robot/>");
    write(temp_dir.path(), "empty.xml", "");
    write(temp_dir.path(), "notes.txt", "");
    write(temp_dir.path(), "nested/output.xml", "<robot/>");

    let files = locate_reports(temp_dir.path(), "*.xml").unwrap();
    assert_eq!(files.len(), 2);

    let recursive = locate_reports(temp_dir.path(), "**/*.xml").unwrap();
    assert_eq!(recursive.len(), 3);
}

#[test]
fn locate_reports_errors_when_nothing_matches() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "robot_report.xml", "<robot/>");

    let err = locate_reports(temp_dir.path(), "invalid.xml").unwrap_err();
    assert!(matches!(err, RobotGuardError::NoReportsFound { .. }));
}

#[test]
fn locate_reports_errors_for_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("invalid");

    let err = locate_reports(&missing, "robot_report.xml").unwrap_err();
    assert!(matches!(err, RobotGuardError::NoReportsFound { .. }));
}

#[test]
fn locate_reports_rejects_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let err = locate_reports(temp_dir.path(), "[unclosed").unwrap_err();
    assert!(matches!(err, RobotGuardError::InvalidPattern { .. }));
}
