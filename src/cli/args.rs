//! Command-line arguments.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Search a list of people by name or email.
#[derive(Debug, Parser)]
#[command(name = "people-finder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search a list of people by name or email")]
pub struct Args {
    /// File with one person per line (records are read from stdin otherwise)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Output format for search results
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}
