//! Data models for ingested person records.
//!
//! A record is one line of input text (typically a name and an email),
//! identified by the order in which it was ingested.

pub mod record;

pub use record::Record;
