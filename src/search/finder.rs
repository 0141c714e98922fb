//! Strategy orchestration: from a query to an ordered list of records.

use super::inverted_index::InvertedIndex;
use super::strategy::StrategyKind;
use crate::domain::RecordId;
use crate::models::Record;
use tracing::debug;

/// Runs one matching strategy and projects the hits back onto records.
#[derive(Debug, Clone, Copy)]
pub struct Finder {
    kind: StrategyKind,
}

impl Finder {
    /// Create a finder for the given strategy.
    pub fn new(kind: StrategyKind) -> Self {
        Self { kind }
    }

    /// Find the ids matching `query`, in ascending order.
    pub fn find_ids(
        &self,
        index: &InvertedIndex,
        query: &str,
        record_count: usize,
    ) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self
            .kind
            .strategy()
            .matching_ids(index, query, record_count)
            .into_iter()
            .collect();
        ids.sort_unstable();

        debug!(
            strategy = %self.kind,
            query,
            hits = ids.len(),
            "Search completed"
        );
        ids
    }

    /// Find the records matching `query`, in ingestion order.
    ///
    /// `records` must be exactly the records ingested into `index`.
    pub fn find_records<'r>(
        &self,
        index: &InvertedIndex,
        query: &str,
        records: &'r [Record],
    ) -> Vec<&'r Record> {
        self.find_ids(index, query, records.len())
            .into_iter()
            .map(|id| &records[id.index()])
            .collect()
    }

    /// Find the text of the records matching `query`, in ingestion order.
    pub fn find<'r>(
        &self,
        index: &InvertedIndex,
        query: &str,
        records: &'r [Record],
    ) -> Vec<&'r str> {
        self.find_records(index, query, records)
            .into_iter()
            .map(Record::text)
            .collect()
    }
}

impl From<StrategyKind> for Finder {
    fn from(kind: StrategyKind) -> Self {
        Self::new(kind)
    }
}
