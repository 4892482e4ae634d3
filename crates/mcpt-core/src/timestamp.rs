//! Log-line timestamp scanning.

use std::sync::LazyLock;

use regex::Regex;

/// Pre-compiled pattern for the `[hh:mm:ss]` token at the head of a log line.
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([0-9]{2}):([0-9]{2}):([0-9]{2})\]").unwrap());

/// A point in time within one day, counted in seconds since local midnight.
///
/// Reconstructed from the `[hh:mm:ss]` token the game prefixes to every log
/// line. This is not a calendar date: a single line carries no day
/// information, so differences only order correctly within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Scans the leading `[hh:mm:ss]` token of a log line.
    ///
    /// Returns `None` when the line does not start with a well-formed token.
    /// Each two-digit slot is taken as a plain integer, so out-of-calendar
    /// values such as hour 99 still scan; the log format makes no promise
    /// beyond "two ASCII digits".
    #[must_use]
    pub fn scan_line(line: &str) -> Option<Self> {
        let caps = TIMESTAMP_RE.captures(line)?;
        let slot = |i: usize| caps[i].parse::<i64>().ok();
        let (hours, minutes, seconds) = (slot(1)?, slot(2)?, slot(3)?);
        Some(Self((hours * 60 + minutes) * 60 + seconds))
    }

    /// Returns the value as seconds since midnight.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        self.0
    }
}
