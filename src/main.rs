//! People Finder - Main entry point
//!
//! Loads person records from a file or the terminal, then runs the
//! interactive search menu on stdin/stdout.

use anyhow::Result;
use clap::Parser;
use people_finder::cli::{loader, Args, Session};
use people_finder::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?.merge_args(&args);

    // Logging goes to stderr, stdout is the user interface
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(?config, "Configuration loaded");

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let store = match config.data_file {
        Some(ref path) => loader::load_from_file(path),
        None => loader::load_interactive(&mut input, &mut output),
    };
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load people: {}", e);
            return Err(e.into());
        }
    };

    info!(
        records = store.len(),
        words = store.index().word_count(),
        "Search index ready"
    );

    Session::new(store, input, output, config.output_format).run()?;

    info!("Session finished");
    Ok(())
}
