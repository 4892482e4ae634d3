//! Duration aggregation across log directories and installation trees.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extract::{FileDuration, session_duration};
use crate::names::{EntryKind, LIVE_LOG, classify_name};

/// Accumulated play time for one traversal root.
///
/// Per-file failures during traversal are excluded from both fields, so an
/// aggregate with no files is a successful empty result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Signed sum of per-file session durations, in seconds.
    pub seconds: i64,
    /// Every successfully parsed file, in traversal order.
    pub files: Vec<FileDuration>,
}

impl Totals {
    /// Number of files that parsed successfully.
    #[must_use]
    pub fn files_parsed(&self) -> usize {
        self.files.len()
    }

    /// Adds one parsed file to the aggregate.
    pub fn record(&mut self, file: FileDuration) {
        self.seconds += file.seconds;
        self.files.push(file);
    }

    /// Folds another aggregate into this one.
    pub fn merge(&mut self, other: Self) {
        self.seconds += other.seconds;
        self.files.extend(other.files);
    }
}

/// Runs the extractor on one path, accumulating on success and skipping on
/// failure. A corrupt or foreign file never aborts the batch.
fn extract_into(totals: &mut Totals, path: &Path) {
    match session_duration(path) {
        Ok(file) => totals.record(file),
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "skipping unparsable log");
        }
    }
}

/// Aggregates the durations of every recognized log in one directory.
///
/// All archived logs are extracted in lexical name order (rotation names
/// sort chronologically), then the live `latest.log` is attempted
/// unconditionally; its absence is just another skip. Returns an error only
/// when the directory itself cannot be listed.
pub fn aggregate_log_directory(dir: &Path) -> io::Result<Totals> {
    let mut archived: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            if classify_name(name) == EntryKind::Archived {
                archived.push(entry.path());
            }
        }
    }
    archived.sort();

    let mut totals = Totals::default();
    for path in &archived {
        extract_into(&mut totals, path);
    }
    extract_into(&mut totals, &dir.join(LIVE_LOG));
    Ok(totals)
}

/// Aggregates a whole installation tree.
///
/// Covers the shared `logs` directory under the root plus the `logs`
/// directory of every version under `versions`. Every missing or unreadable
/// piece contributes zero; an installation with no `versions` directory at
/// all is perfectly normal.
pub fn aggregate_installation(root: &Path) -> Totals {
    let mut totals = Totals::default();

    match aggregate_log_directory(&root.join("logs")) {
        Ok(logs) => totals.merge(logs),
        Err(error) => {
            tracing::warn!(root = %root.display(), %error, "skipping unreadable logs directory");
        }
    }

    let versions = root.join("versions");
    let entries = match std::fs::read_dir(&versions) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::debug!(path = %versions.display(), %error, "no versions directory");
            return totals;
        }
    };

    let mut version_dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    version_dirs.sort();

    for version in &version_dirs {
        match aggregate_log_directory(&version.join("logs")) {
            Ok(logs) => totals.merge(logs),
            Err(error) => {
                tracing::debug!(version = %version.display(), %error, "version has no readable logs");
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn line(seconds: i64) -> String {
        format!(
            "[{:02}:{:02}:{:02}] [main/INFO]: tick",
            seconds / 3600,
            seconds / 60 % 60,
            seconds % 60
        )
    }

    /// Writes a plain log spanning `duration` seconds from 10:00:00.
    fn write_live_log(dir: &Path, duration: i64) {
        let start = 10 * 3600;
        std::fs::write(
            dir.join(LIVE_LOG),
            format!("{}\n{}\n", line(start), line(start + duration)),
        )
        .unwrap();
    }

    /// Writes a gzipped archived log spanning `duration` seconds.
    fn write_archived_log(dir: &Path, name: &str, duration: i64) {
        let start = 8 * 3600;
        let file = std::fs::File::create(dir.join(name)).unwrap();
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        writeln!(encoder, "{}", line(start)).unwrap();
        writeln!(encoder, "{}", line(start + duration)).unwrap();
        encoder.finish().unwrap();
    }

    #[test]
    fn sums_archives_and_live_log_skipping_corrupt_files() {
        let temp = TempDir::new().unwrap();
        write_archived_log(temp.path(), "2024-01-02-1.log.gz", 100);
        write_archived_log(temp.path(), "2024-01-03-1.log.gz", 200);
        write_live_log(temp.path(), 50);
        // Correctly named but not gzip data: silently excluded.
        std::fs::write(temp.path().join("2024-01-04-1.log.gz"), b"corrupt").unwrap();

        let totals = aggregate_log_directory(temp.path()).unwrap();
        assert_eq!(totals.seconds, 350);
        assert_eq!(totals.files_parsed(), 3);
    }

    #[test]
    fn foreign_files_are_not_scanned() {
        let temp = TempDir::new().unwrap();
        write_live_log(temp.path(), 25);
        std::fs::write(temp.path().join("debug.log"), line(0)).unwrap();
        std::fs::write(temp.path().join("2024-01-2-1.log.gz"), b"wrong digits").unwrap();

        let totals = aggregate_log_directory(temp.path()).unwrap();
        assert_eq!(totals.seconds, 25);
        assert_eq!(totals.files_parsed(), 1);
    }

    #[test]
    fn empty_directory_is_a_successful_empty_aggregate() {
        let temp = TempDir::new().unwrap();
        let totals = aggregate_log_directory(temp.path()).unwrap();
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn unlistable_directory_is_a_system_failure() {
        assert!(aggregate_log_directory(Path::new("/nonexistent/logs")).is_err());
    }

    #[test]
    fn archives_are_processed_in_name_order() {
        let temp = TempDir::new().unwrap();
        write_archived_log(temp.path(), "2024-01-03-1.log.gz", 200);
        write_archived_log(temp.path(), "2024-01-02-1.log.gz", 100);

        let totals = aggregate_log_directory(temp.path()).unwrap();
        let names: Vec<_> = totals
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["2024-01-02-1.log.gz", "2024-01-03-1.log.gz"]);
    }

    #[test]
    fn installation_tree_covers_root_and_version_logs() {
        let temp = TempDir::new().unwrap();
        let root_logs = temp.path().join("logs");
        std::fs::create_dir(&root_logs).unwrap();
        write_live_log(&root_logs, 10);

        let v10_logs = temp.path().join("versions/1.0/logs");
        std::fs::create_dir_all(&v10_logs).unwrap();
        write_live_log(&v10_logs, 20);

        // A version without a logs directory contributes zero.
        std::fs::create_dir_all(temp.path().join("versions/1.1")).unwrap();

        let totals = aggregate_installation(temp.path());
        assert_eq!(totals.seconds, 30);
        assert_eq!(totals.files_parsed(), 2);
    }

    #[test]
    fn installation_without_versions_directory_is_tolerated() {
        let temp = TempDir::new().unwrap();
        let root_logs = temp.path().join("logs");
        std::fs::create_dir(&root_logs).unwrap();
        write_live_log(&root_logs, 45);

        let totals = aggregate_installation(temp.path());
        assert_eq!(totals.seconds, 45);
        assert_eq!(totals.files_parsed(), 1);
    }

    #[test]
    fn installation_without_any_logs_is_empty_not_an_error() {
        let temp = TempDir::new().unwrap();
        let totals = aggregate_installation(temp.path());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn plain_files_under_versions_are_ignored() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("versions")).unwrap();
        std::fs::write(temp.path().join("versions/README.txt"), "not a version").unwrap();

        let totals = aggregate_installation(temp.path());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn merge_folds_seconds_and_files() {
        let mut a = Totals::default();
        a.record(FileDuration {
            path: PathBuf::from("a.log"),
            seconds: 30,
        });
        let mut b = Totals::default();
        b.record(FileDuration {
            path: PathBuf::from("b.log"),
            seconds: -10,
        });

        a.merge(b);
        assert_eq!(a.seconds, 20);
        assert_eq!(a.files_parsed(), 2);
    }
}
