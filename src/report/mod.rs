//! Report tree: the suite/test/keyword hierarchy of one Robot Framework
//! `output.xml`, built once by [`parse_report`] and read-only afterwards.

mod parser;

pub use parser::{ParseError, parse_report};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Level of the status message picked up as a failed test's error text.
pub const ERROR_LEVEL: &str = "ERROR";

/// Execution outcome of a test or keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
}

impl Outcome {
    /// Literal label as written in `output.xml`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status string that is none of `PASS`, `FAIL` or `SKIP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOutcome(pub String);

impl fmt::Display for UnknownOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown outcome '{}'", self.0)
    }
}

impl std::error::Error for UnknownOutcome {}

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            "SKIP" => Ok(Self::Skip),
            other => Err(UnknownOutcome(other.to_string())),
        }
    }
}

/// Raw start/end timestamps of a node, kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timing {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Timing {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// True when neither end carries a timestamp.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// A status message attached to a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub name: String,
    pub outcome: Outcome,
    pub keywords: Vec<Keyword>,
}

impl Keyword {
    #[must_use]
    pub fn new(name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            name: name.into(),
            outcome,
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: Self) -> Self {
        self.keywords.push(keyword);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    pub name: String,
    /// Name of the owning suite.
    pub suite: String,
    pub outcome: Outcome,
    pub critical: bool,
    pub timing: Timing,
    pub messages: Vec<Message>,
    pub keywords: Vec<Keyword>,
}

impl Test {
    #[must_use]
    pub fn new(name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            name: name.into(),
            suite: String::new(),
            outcome,
            critical: false,
            timing: Timing::default(),
            messages: Vec::new(),
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub const fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, start: &str, end: &str) -> Self {
        self.timing = Timing::new(start, end);
        self
    }

    #[must_use]
    pub fn with_message(mut self, level: &str, text: &str) -> Self {
        self.messages.push(Message {
            level: level.to_string(),
            text: text.to_string(),
        });
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keywords.push(keyword);
        self
    }

    /// Text of the last `ERROR`-level status message, or `""` if there is none.
    #[must_use]
    pub fn last_error_message(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|msg| msg.level == ERROR_LEVEL)
            .map_or("", |msg| msg.text.as_str())
    }
}

/// Suite-level status. The outcome is informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteStatus {
    pub outcome: Option<Outcome>,
    pub timing: Timing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suite {
    pub name: String,
    pub status: Option<SuiteStatus>,
    pub tests: Vec<Test>,
    pub keywords: Vec<Keyword>,
    pub suites: Vec<Suite>,
}

impl Suite {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timing(mut self, start: &str, end: &str) -> Self {
        let status = self.status.get_or_insert_with(SuiteStatus::default);
        status.timing = Timing::new(start, end);
        self
    }

    /// Adds a direct test, recording this suite as its owner.
    #[must_use]
    pub fn with_test(mut self, mut test: Test) -> Self {
        test.suite.clone_from(&self.name);
        self.tests.push(test);
        self
    }

    #[must_use]
    pub fn with_suite(mut self, suite: Self) -> Self {
        self.suites.push(suite);
        self
    }

    /// Whether this suite counts towards `total_suites`: it must hold at least
    /// one direct test or one direct sub-suite.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.tests.is_empty() || !self.suites.is_empty()
    }

    /// Timing of this suite, if it carries a status.
    #[must_use]
    pub fn timing(&self) -> Option<&Timing> {
        self.status.as_ref().map(|status| &status.timing)
    }
}

/// One parsed report file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTree {
    pub suite: Suite,
    /// Execution errors listed under `<errors>`.
    pub errors: Vec<String>,
    /// Tests and keywords dropped because their outcome was unrecognized.
    pub dropped_nodes: usize,
}

impl ReportTree {
    #[must_use]
    pub fn new(suite: Suite) -> Self {
        Self {
            suite,
            errors: Vec::new(),
            dropped_nodes: 0,
        }
    }

    /// A tree whose root has neither tests nor sub-suites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.suite.has_content()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
