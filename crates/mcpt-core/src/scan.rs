//! Path classification and dispatch.
//!
//! One input path can be a single log file, a plain log directory, or a
//! whole installation root. Classification picks the matching aggregator,
//! and every failure comes back as a path-scoped [`ScanError`] so the
//! caller decides what to do with the remaining paths.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::aggregate::{Totals, aggregate_installation, aggregate_log_directory};
use crate::extract::{ExtractError, session_duration};

/// Directory base name that marks a full client installation.
pub const INSTALLATION_DIR: &str = ".minecraft";

/// A failed or empty dispatch for one input path.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Filesystem failure: cannot stat, open, read, or list.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file's content never produced a valid timestamp.
    #[error("{}: Not a minecraft log file", path.display())]
    NotALog { path: PathBuf },
    /// Traversal completed but matched zero files. Advisory, not fatal.
    #[error("{}: No file parsed", path.display())]
    Empty { path: PathBuf },
    /// Not a regular file or directory.
    #[error("{}: Not a directory or a regular file", path.display())]
    Unsupported { path: PathBuf },
}

impl ScanError {
    /// Empty aggregates warrant a warning; everything else is an error.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Classifies one input path and runs the matching aggregator.
///
/// Regular files go straight to the extractor. Directories are resolved and
/// dispatched on their base name: exactly `.minecraft` means installation
/// semantics, anything else means plain log-directory semantics. A dispatch
/// that parses zero files is reported as [`ScanError::Empty`].
pub fn scan_path(path: &Path) -> Result<Totals, ScanError> {
    let io_err = |source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    };
    let metadata = std::fs::metadata(path).map_err(io_err)?;

    if metadata.is_file() {
        let mut totals = Totals::default();
        match session_duration(path) {
            Ok(file) => totals.record(file),
            Err(ExtractError::Io(source)) => return Err(io_err(source)),
            Err(ExtractError::NoTimestamps) => {
                return Err(ScanError::NotALog {
                    path: path.to_path_buf(),
                });
            }
        }
        return Ok(totals);
    }

    if metadata.is_dir() {
        let totals = if is_installation_root(path).map_err(io_err)? {
            tracing::debug!(path = %path.display(), "dispatching as installation root");
            aggregate_installation(path)
        } else {
            tracing::debug!(path = %path.display(), "dispatching as log directory");
            aggregate_log_directory(path).map_err(io_err)?
        };
        if totals.files_parsed() == 0 {
            return Err(ScanError::Empty {
                path: path.to_path_buf(),
            });
        }
        return Ok(totals);
    }

    Err(ScanError::Unsupported {
        path: path.to_path_buf(),
    })
}

/// Whether a directory's resolved base name is exactly `.minecraft`.
///
/// The comparison is case-sensitive and runs on the canonicalized path, so
/// `.`, trailing slashes, and symlinks into an installation all resolve to
/// the real directory name.
fn is_installation_root(path: &Path) -> io::Result<bool> {
    let resolved = std::fs::canonicalize(path)?;
    Ok(resolved
        .file_name()
        .is_some_and(|name| name == INSTALLATION_DIR))
}
