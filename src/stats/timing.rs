//! Robot Framework timestamp handling.
//!
//! Timestamps look like `20250101 12:00:00.000`. Parsing is lenient: a node
//! whose timing cannot be derived contributes nothing to the execution time.

use chrono::NaiveDateTime;

use crate::report::Timing;

/// `strftime` layout of `starttime`/`endtime` attributes.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d %H:%M:%S%.3f";

/// Elapsed time of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    /// Neither timestamp present.
    Absent,
    /// Both timestamps parsed and `end >= start`.
    Millis(u64),
    /// A timestamp was present but unusable (bad format, missing other end,
    /// or end before start).
    Invalid,
}

#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).ok()
}

#[must_use]
pub fn elapsed(timing: &Timing) -> Elapsed {
    if timing.is_absent() {
        return Elapsed::Absent;
    }

    let start = timing.start.as_deref().and_then(parse_timestamp);
    let end = timing.end.as_deref().and_then(parse_timestamp);
    let (Some(start), Some(end)) = (start, end) else {
        return Elapsed::Invalid;
    };

    u64::try_from((end - start).num_milliseconds()).map_or(Elapsed::Invalid, Elapsed::Millis)
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
