//! Word-to-record inverted index.
//!
//! The index maps every lowercase word to the set of record ids whose text
//! contains it. It only ever grows: ingestion unions ids into posting sets
//! and nothing removes them.

use super::tokenizer::tokenize;
use crate::domain::RecordId;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// The set of record ids containing a given word.
///
/// Iteration order is unspecified; callers sort when order matters.
pub type PostingSet = HashSet<RecordId>;

static EMPTY_POSTINGS: Lazy<PostingSet> = Lazy::new(PostingSet::new);

/// Inverted index from word to posting set.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingSet>,
}

impl InvertedIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the posting set of every word in `text`.
    ///
    /// Ids are expected to be unique and assigned in increasing order from
    /// zero. Ingesting the same `(id, text)` pair again changes nothing.
    pub fn ingest(&mut self, id: RecordId, text: &str) {
        for word in tokenize(text) {
            self.postings.entry(word).or_default().insert(id);
        }
        trace!(record_id = %id, words = self.postings.len(), "Ingested record");
    }

    /// Get the posting set for a word, or an empty set if it was never seen.
    ///
    /// The word is matched case-insensitively.
    pub fn lookup(&self, word: &str) -> &PostingSet {
        self.postings
            .get(fold_case(word).as_ref())
            .unwrap_or(&*EMPTY_POSTINGS)
    }

    /// Check whether a word has been indexed, ignoring case.
    pub fn contains_word(&self, word: &str) -> bool {
        self.postings.contains_key(fold_case(word).as_ref())
    }

    /// Get the number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }

    /// Check whether nothing has been indexed yet.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Lowercase a word, borrowing it when it is already lowercase.
fn fold_case(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
