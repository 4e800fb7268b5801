use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("Unknown output format"));
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn formatters_share_trait() {
    let summary = RunSummary::default();
    let report = RunReport::new(&summary, None);
    let formatters: Vec<Box<dyn OutputFormatter>> = vec![
        Box::new(TextFormatter::new(ColorMode::Never)),
        Box::new(JsonFormatter),
    ];

    for formatter in formatters {
        assert!(!formatter.format(&report).unwrap().is_empty());
    }
}
