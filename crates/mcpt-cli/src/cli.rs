//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
    mc-playtime .
    mc-playtime ./.minecraft
    mc-playtime ./.minecraft/logs
    mc-playtime ./.minecraft/logs/latest.log
    mc-playtime ./version1/logs ./version2/logs";

/// Calculate your play time in Minecraft by parsing logs.
///
/// Each path may be a single log file, a logs directory, or a whole
/// `.minecraft` installation; the durations found under every path are
/// summed into one final report.
#[derive(Debug, Parser)]
#[command(name = "mc-playtime", version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit the report as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Log files, log directories, or .minecraft directories to scan.
    pub paths: Vec<PathBuf>,
}
