use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mcpt_cli::Cli;
use mcpt_cli::report::{Report, format_total};
use mcpt_core::{Totals, scan_path};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Diagnostics go to stderr so the report surface stays parseable.
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if cli.paths.is_empty() {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    tracing::debug!(paths = cli.paths.len(), "scanning input paths");

    let mut totals = Totals::default();
    for path in &cli.paths {
        // Each path stands alone: a failure here never stops the rest.
        match scan_path(path) {
            Ok(found) => {
                if !cli.json {
                    for file in &found.files {
                        println!("{}: {}", file.path.display(), file.seconds);
                    }
                }
                totals.merge(found);
            }
            Err(error) if error.is_warning() => eprintln!("WARNING: {error}"),
            Err(error) => eprintln!("ERROR: {error}"),
        }
    }

    if cli.json {
        let report = Report::from(totals);
        serde_json::to_writer_pretty(std::io::stdout().lock(), &report)
            .context("failed to serialize report")?;
        println!();
    } else {
        println!("{} files parsed", totals.files_parsed());
        println!("{}", format_total(totals.seconds));
    }

    Ok(())
}
