//! Play-time calculator CLI library.
//!
//! This crate provides the CLI interface for the play-time calculator.

mod cli;
pub mod report;

pub use cli::Cli;
