//! Core domain logic for the Minecraft play-time calculator.
//!
//! This crate contains the fundamental types and logic for:
//! - Timestamp scanning: recovering `[hh:mm:ss]` tokens from log lines
//! - Extraction: turning one (possibly gzipped) log file into a session duration
//! - Aggregation: summing durations across log directories and whole
//!   `.minecraft` installation trees

pub mod aggregate;
pub mod extract;
pub mod names;
pub mod scan;
pub mod timestamp;

pub use aggregate::{Totals, aggregate_installation, aggregate_log_directory};
pub use extract::{ExtractError, FileDuration, session_duration};
pub use names::{EntryKind, LIVE_LOG, classify_name, is_archived_log};
pub use scan::{INSTALLATION_DIR, ScanError, scan_path};
pub use timestamp::Timestamp;
