//! Final report rendering, human-readable and JSON.

use mcpt_core::{FileDuration, Totals};
use serde::Serialize;

/// Invocation-wide totals in JSON-ready form.
#[derive(Debug, Serialize)]
pub struct Report {
    pub files_parsed: usize,
    pub total_seconds: i64,
    pub files: Vec<FileDuration>,
}

impl From<Totals> for Report {
    fn from(totals: Totals) -> Self {
        Self {
            files_parsed: totals.files_parsed(),
            total_seconds: totals.seconds,
            files: totals.files,
        }
    }
}

/// Formats the final total line, e.g. `total time: 3661 = 1h 1min 1s`.
///
/// Plain signed integer division throughout, so a negative total (midnight
/// rollover, never corrected) renders with negative components.
#[must_use]
pub fn format_total(seconds: i64) -> String {
    format!(
        "total time: {seconds} = {}h {}min {}s",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}
