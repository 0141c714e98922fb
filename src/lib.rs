//! People Finder - in-memory search over a list of person records.
//!
//! Records (typically a name and an email per line) are ingested into an
//! inverted index from lowercase word to record ids. Queries are answered by
//! one of three boolean strategies: every word must match (`ALL`), any word
//! may match (`ANY`), or no word may match (`NONE`). Results always come
//! back in ingestion order.
//!
//! # Architecture
//!
//! - **domain**: The `RecordId` value object
//! - **models**: The `Record` data structure
//! - **search**: Tokenizer, inverted index, matching strategies and finder
//! - **store**: Record store that keeps records and index in sync
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Arguments, record loading and the interactive menu
//!
//! # Example
//!
//! ```
//! use people_finder::{RecordStore, StrategyKind};
//!
//! let store: RecordStore = ["Alice Smith alice@x.com", "Bob Jones bob@x.com"]
//!     .into_iter()
//!     .collect();
//!
//! let kind: StrategyKind = "ANY".parse().unwrap();
//! assert_eq!(store.find(kind, "ALICE"), vec!["Alice Smith alice@x.com"]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod search;
pub mod store;

pub use config::{Config, OutputFormat};
pub use domain::RecordId;
pub use error::{CliError, ConfigError, SearchError};
pub use models::Record;
pub use search::{
    AllWordMatch, AnyWordMatch, Finder, InvertedIndex, NoneWordMatch, PostingSet, SearchStrategy,
    StrategyKind,
};
pub use store::RecordStore;
