//! Append-only record store backed by an inverted index.

use crate::domain::RecordId;
use crate::models::Record;
use crate::search::{Finder, InvertedIndex, StrategyKind};
use tracing::debug;

/// Ordered collection of records plus their inverted index.
///
/// Ingestion is the only mutation. Ids are assigned densely from zero, so
/// every id produced by a search is a valid position in [`records`](Self::records).
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    index: InvertedIndex,
}

impl RecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and index its words.
    ///
    /// Returns the id assigned to the new record.
    pub fn ingest(&mut self, text: impl Into<String>) -> RecordId {
        let id = RecordId::new(self.records.len());
        let record = Record::new(id, text);
        self.index.ingest(id, &record.text);
        self.records.push(record);
        id
    }

    /// Get all records in ingestion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get a record by id.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.index())
    }

    /// Get the inverted index built from the records.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the records matching `query` with the given strategy.
    pub fn find_records(&self, kind: StrategyKind, query: &str) -> Vec<&Record> {
        Finder::new(kind).find_records(&self.index, query, &self.records)
    }

    /// Find the text of the records matching `query` with the given strategy.
    pub fn find(&self, kind: StrategyKind, query: &str) -> Vec<&str> {
        Finder::new(kind).find(&self.index, query, &self.records)
    }
}

impl<S: Into<String>> Extend<S> for RecordStore {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        let before = self.len();
        for text in iter {
            self.ingest(text);
        }
        debug!(
            added = self.len() - before,
            total = self.len(),
            words = self.index.word_count(),
            "Ingested records"
        );
    }
}

impl<S: Into<String>> FromIterator<S> for RecordStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
