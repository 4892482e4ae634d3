//! Lexical classification of log-directory entries.

use std::sync::LazyLock;

use regex::Regex;

/// Rotated logs are named by rotation date and sequence index, e.g.
/// `2024-01-02-1.log.gz`. Digit run lengths are fixed by position.
static ARCHIVED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}-[0-9]\.log\.gz$").unwrap());

/// Fixed name of the live log for the running or most recent session.
pub const LIVE_LOG: &str = "latest.log";

/// What a directory entry's name says about it. Purely lexical; the file is
/// never opened or stat'd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A rotated, gzip-compressed log (`DDDD-DD-DD-D.log.gz`).
    Archived,
    /// The live log, literally `latest.log`.
    Live,
    /// Anything else.
    Other,
}

/// Classifies a filename by the recognized log naming conventions.
#[must_use]
pub fn classify_name(name: &str) -> EntryKind {
    if is_archived_log(name) {
        EntryKind::Archived
    } else if name == LIVE_LOG {
        EntryKind::Live
    } else {
        EntryKind::Other
    }
}

/// Whether a filename denotes a date-indexed archived log.
#[must_use]
pub fn is_archived_log(name: &str) -> bool {
    ARCHIVED_RE.is_match(name)
}
