//! Inverted-index search over person records.
//!
//! Records are tokenized into lowercase words and indexed by id. Queries are
//! answered by one of three boolean strategies (ALL, ANY, NONE) and the
//! [`Finder`] turns the matching ids back into records in ingestion order.

pub mod finder;
pub mod inverted_index;
pub mod strategy;
pub mod tokenizer;

pub use finder::Finder;
pub use inverted_index::{InvertedIndex, PostingSet};
pub use strategy::{AllWordMatch, AnyWordMatch, NoneWordMatch, SearchStrategy, StrategyKind};
pub use tokenizer::tokenize;
