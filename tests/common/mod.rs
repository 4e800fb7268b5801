#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the robot-guard binary, with the
/// plugin environment cleared so the host cannot leak settings into a test.
#[macro_export]
macro_rules! robot_guard {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("robot-guard"));
        for var in [
            "PLUGIN_REPORT_DIRECTORY",
            "PLUGIN_REPORT_FILE_NAME_PATTERN",
            "PLUGIN_PASS_THRESHOLD",
            "PLUGIN_UNSTABLE_THRESHOLD",
            "PLUGIN_COUNT_SKIPPED_TESTS",
            "PLUGIN_ONLY_CRITICAL",
            "PLUGIN_LOG_LEVEL",
            "DRONE_OUTPUT",
            "RUST_LOG",
            "NO_COLOR",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }};
}

/// Four tests: critical pass, critical fail, non-critical fail, skip.
pub const ROBOT_REPORT: &str = include_str!("../fixtures/robot_report.xml");

/// Three suites, three tests, one failure.
pub const NESTED_REPORT: &str = include_str!("../fixtures/nested_report.xml");

/// A report that is cut off mid-document.
pub const TRUNCATED_REPORT: &str = "<robot><suite name=\"Broken\"><test name=\"T\">";

/// Creates a temporary directory with report files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes a report under `reports/`.
    pub fn create_report(&self, name: &str, content: &str) {
        self.create_file(&format!("reports/{name}"), content);
    }

    /// Creates a `.robot-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".robot-guard.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.dir.path().join("reports")
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config pointing at `reports/` with lenient thresholds.
pub const BASIC_CONFIG: &str = r#"
version = "1"

[report]
directory = "reports"

[thresholds]
pass = 5
unstable = 1
"#;
