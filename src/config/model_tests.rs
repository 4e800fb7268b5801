use std::path::PathBuf;

use super::*;

#[test]
fn default_config_values() {
    let config = Config::default();

    assert!(config.version.is_none());
    assert!(config.report.directory.is_none());
    assert_eq!(config.report.file_name_pattern, "*.xml");
    assert_eq!(config.thresholds.pass, 0);
    assert_eq!(config.thresholds.unstable, 0);
    assert!(!config.stats.count_skipped);
    assert!(!config.stats.only_critical);
    assert!(!config.stats.parallel_traversal);
    assert!(config.log.level.is_none());
}

#[test]
fn empty_document_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parses_full_document() {
    let content = r#"
version = "1"

[report]
directory = "reports"
file_name_pattern = "output-*.xml"

[thresholds]
pass = 5
unstable = 2

[stats]
count_skipped = true
only_critical = true
parallel_traversal = true

[log]
level = "debug"
"#;

    let config: Config = toml::from_str(content).unwrap();

    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.report.directory, Some(PathBuf::from("reports")));
    assert_eq!(config.report.file_name_pattern, "output-*.xml");
    assert_eq!(config.thresholds.pass, 5);
    assert_eq!(config.thresholds.unstable, 2);
    assert!(config.stats.count_skipped);
    assert!(config.stats.only_critical);
    assert!(config.stats.parallel_traversal);
    assert_eq!(config.log.level.as_deref(), Some("debug"));
}

#[test]
fn partial_report_section_keeps_default_pattern() {
    let config: Config = toml::from_str("[report]\ndirectory = \"out\"\n").unwrap();
    assert_eq!(config.report.file_name_pattern, DEFAULT_PATTERN);
}

#[test]
fn negative_thresholds_parse() {
    let config: Config = toml::from_str("[thresholds]\npass = -1\n").unwrap();
    assert_eq!(config.thresholds.pass, -1);
}

#[test]
fn wrong_type_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[thresholds]\npass = \"many\"\n");
    assert!(result.is_err());
}

#[test]
fn serializes_back_to_equal_config() {
    let mut config = Config::default();
    config.report.directory = Some(PathBuf::from("reports"));
    config.thresholds.pass = 3;

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();

    assert_eq!(parsed, config);
}
