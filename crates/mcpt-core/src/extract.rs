//! Session duration extraction from a single log file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::Serialize;
use thiserror::Error;

use crate::timestamp::Timestamp;

/// Buffer size for `BufReader` (64KB for optimal performance on large files)
const BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened or read, including corrupt gzip data
    /// surfacing mid-stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The stream was exhausted without a single valid timestamp.
    #[error("no timestamped lines found")]
    NoTimestamps,
}

/// Play time recovered from one log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDuration {
    pub path: PathBuf,
    /// Elapsed seconds between the first and last timestamp in the file.
    ///
    /// Signed: a session crossing midnight comes out negative and is kept
    /// as-is, a known limitation of the day-less log timestamps.
    pub seconds: i64,
}

/// Extracts the session duration recorded by a single log file.
///
/// Files whose name ends in `.gz` are decoded as gzip streams; anything
/// else is read as plain text. The first timestamped line marks the session
/// start and the last one marks the end, so a file with a single timestamp
/// yields zero. Lines without a leading timestamp are skipped. A log cut
/// short by a crash still counts up to its last timestamp.
pub fn session_duration(path: &Path) -> Result<FileDuration, ExtractError> {
    let file = File::open(path)?;
    let seconds = if path.extension().is_some_and(|ext| ext == "gz") {
        scan_stream(BufReader::with_capacity(BUFFER_SIZE, GzDecoder::new(file)))?
    } else {
        scan_stream(BufReader::with_capacity(BUFFER_SIZE, file))?
    };
    Ok(FileDuration {
        path: path.to_path_buf(),
        seconds,
    })
}

/// Scans a decoded stream for its first and last timestamps.
fn scan_stream(mut reader: impl BufRead) -> Result<i64, ExtractError> {
    let mut start: Option<Timestamp> = None;
    let mut last_seen: Option<Timestamp> = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Log payloads are not guaranteed UTF-8; the timestamp token is
        // plain ASCII, so lossy conversion never corrupts it.
        let line = String::from_utf8_lossy(&buf);
        let Some(ts) = Timestamp::scan_line(&line) else {
            continue;
        };
        start.get_or_insert(ts);
        last_seen = Some(ts);
    }

    match (start, last_seen) {
        (Some(start), Some(end)) => Ok(end.seconds() - start.seconds()),
        _ => Err(ExtractError::NoTimestamps),
    }
}
