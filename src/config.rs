//! Configuration management for People Finder.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded if present; command-line arguments override anything read here.

use crate::cli::Args;
use crate::error::{ConfigError, ConfigResult};
use clap::ValueEnum;
use std::env;
use std::path::PathBuf;

/// How search results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One record per line
    #[default]
    Text,
    /// A JSON array of `{ "id", "text" }` objects
    Json,
}

/// Configuration for People Finder.
#[derive(Debug, Clone)]
pub struct Config {
    /// File with one record per line (default: none, read records interactively)
    pub data_file: Option<PathBuf>,

    /// Output format for search results (default: text)
    pub output_format: OutputFormat,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PEOPLE_DATA_FILE`: Path of the records file
    /// - `PEOPLE_OUTPUT_FORMAT`: `text` or `json` (default: text)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = env::var("PEOPLE_DATA_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let output_format = Self::parse_output_format("PEOPLE_OUTPUT_FORMAT")?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            data_file,
            output_format,
            log_level,
        })
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(ref path) = args.data {
            self.data_file = Some(path.clone());
        }
        if let Some(format) = args.format {
            self.output_format = format;
        }
        self
    }

    /// Parse an environment variable as an output format, defaulting to text.
    fn parse_output_format(var_name: &str) -> ConfigResult<OutputFormat> {
        match env::var(var_name) {
            Ok(val) => {
                OutputFormat::from_str(val.trim(), true).map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be text or json, got: {}", val),
                })
            }
            Err(_) => Ok(OutputFormat::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: None,
            output_format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}
