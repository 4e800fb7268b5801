use serde::Deserialize;
use thiserror::Error;

use super::{Keyword, Message, Outcome, ReportTree, Suite, SuiteStatus, Test, Timing};

/// Value of the `critical` status attribute that marks a critical test.
const CRITICAL_YES: &str = "yes";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed report XML: {0}")]
    Xml(#[from] quick_xml::DeError),
}

// Raw shapes of output.xml. Unknown elements (doc, tag, arg, statistics, ...)
// are ignored by serde.

#[derive(Debug, Deserialize)]
struct RawRobot {
    #[serde(default)]
    suite: Option<RawSuite>,
    #[serde(default)]
    errors: Option<RawErrors>,
}

#[derive(Debug, Default, Deserialize)]
struct RawErrors {
    #[serde(rename = "msg", default)]
    messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawSuite {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "test", default)]
    tests: Vec<RawTest>,
    #[serde(rename = "kw", default)]
    keywords: Vec<RawKeyword>,
    #[serde(rename = "suite", default)]
    suites: Vec<RawSuite>,
    #[serde(default)]
    status: Option<RawStatus>,
}

#[derive(Debug, Deserialize)]
struct RawTest {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "kw", default)]
    keywords: Vec<RawKeyword>,
    #[serde(default)]
    status: Option<RawStatus>,
}

#[derive(Debug, Deserialize)]
struct RawKeyword {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "kw", default)]
    keywords: Vec<RawKeyword>,
    #[serde(default)]
    status: Option<RawStatus>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStatus {
    #[serde(rename = "@status", default)]
    status: String,
    #[serde(rename = "@critical", default)]
    critical: Option<String>,
    #[serde(rename = "@starttime", default)]
    start_time: Option<String>,
    #[serde(rename = "@endtime", default)]
    end_time: Option<String>,
    #[serde(rename = "msg", default)]
    messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(rename = "@level", default)]
    level: String,
    #[serde(rename = "$text", default)]
    text: String,
}

/// Parse the bytes of one `output.xml`.
///
/// Returns `Ok(None)` for blank input and for a document without a root
/// suite; both are empty results rather than errors.
///
/// # Errors
/// Returns an error if the bytes are not a well-formed report document.
pub fn parse_report(bytes: &[u8]) -> Result<Option<ReportTree>, ParseError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let raw: RawRobot = quick_xml::de::from_reader(bytes)?;
    let Some(raw_suite) = raw.suite else {
        return Ok(None);
    };

    let mut builder = TreeBuilder::default();
    let suite = builder.suite(raw_suite);
    if builder.dropped > 0 {
        tracing::warn!(
            dropped = builder.dropped,
            "Ignored tests/keywords with an unrecognized status"
        );
    }

    Ok(Some(ReportTree {
        suite,
        errors: raw
            .errors
            .unwrap_or_default()
            .messages
            .into_iter()
            .map(|msg| msg.text)
            .collect(),
        dropped_nodes: builder.dropped,
    }))
}

/// Converts raw nodes into the report tree, validating outcomes once.
#[derive(Debug, Default)]
struct TreeBuilder {
    dropped: usize,
}

impl TreeBuilder {
    fn suite(&mut self, raw: RawSuite) -> Suite {
        let status = raw.status.map(|status| SuiteStatus {
            outcome: status.status.parse().ok(),
            timing: timing(&status),
        });
        let tests = raw
            .tests
            .into_iter()
            .filter_map(|test| self.test(test, &raw.name))
            .collect();
        let keywords = self.keywords(raw.keywords);
        let suites = raw
            .suites
            .into_iter()
            .map(|suite| self.suite(suite))
            .collect();

        Suite {
            name: raw.name,
            status,
            tests,
            keywords,
            suites,
        }
    }

    fn test(&mut self, raw: RawTest, suite_name: &str) -> Option<Test> {
        let status = raw.status.unwrap_or_default();
        let outcome = match status.status.parse::<Outcome>() {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(test = %raw.name, suite = %suite_name, "Skipping test: {e}");
                self.dropped += 1;
                return None;
            }
        };

        Some(Test {
            critical: status.critical.as_deref() == Some(CRITICAL_YES),
            timing: timing(&status),
            messages: status
                .messages
                .into_iter()
                .map(|msg| Message {
                    level: msg.level,
                    text: msg.text,
                })
                .collect(),
            keywords: self.keywords(raw.keywords),
            name: raw.name,
            suite: suite_name.to_string(),
            outcome,
        })
    }

    fn keywords(&mut self, raw: Vec<RawKeyword>) -> Vec<Keyword> {
        raw.into_iter().filter_map(|kw| self.keyword(kw)).collect()
    }

    fn keyword(&mut self, raw: RawKeyword) -> Option<Keyword> {
        let status = raw.status.map(|status| status.status).unwrap_or_default();
        let outcome = match status.parse::<Outcome>() {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(keyword = %raw.name, "Skipping keyword: {e}");
                self.dropped += 1;
                return None;
            }
        };

        Some(Keyword {
            name: raw.name,
            outcome,
            keywords: self.keywords(raw.keywords),
        })
    }
}

fn timing(status: &RawStatus) -> Timing {
    Timing {
        start: status.start_time.clone(),
        end: status.end_time.clone(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
