//! Record model representing one ingested line of text.

use crate::domain::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single person record.
///
/// Records are immutable once created. The text is kept exactly as it was
/// read; case folding only happens when the text is tokenized for the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based ingestion position
    pub id: RecordId,

    /// The original line of text
    pub text: String,
}

impl Record {
    /// Create a new record.
    pub fn new(id: RecordId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Get the record text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
