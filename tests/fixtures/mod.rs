//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable corpora of person records.

use people_finder::{PostingSet, RecordId, RecordStore};

/// The three-person corpus used by the search scenarios.
pub const SCENARIO_PEOPLE: [&str; 3] = [
    "Alice Smith alice@x.com",
    "Bob Jones bob@x.com",
    "Alice Bob shared@x.com",
];

/// A larger corpus with overlapping names and mixed case.
#[allow(dead_code)]
pub const DIRECTORY: [&str; 8] = [
    "Dwight Joseph djo@gmail.com",
    "Rene Webb webb@gmail.com",
    "Katie Jacobs",
    "Erick Harrington harrington@gmail.com",
    "Myrtle Medina",
    "Erick Burgess",
    "KATIE   webb  katie@outlook.com",
    "",
];

/// Build a store from the scenario corpus.
#[allow(dead_code)]
pub fn scenario_store() -> RecordStore {
    SCENARIO_PEOPLE.into_iter().collect()
}

/// Build a store from the larger directory corpus.
#[allow(dead_code)]
pub fn directory_store() -> RecordStore {
    DIRECTORY.into_iter().collect()
}

/// Sort a posting set into plain indexes for comparisons.
#[allow(dead_code)]
pub fn sorted_ids(set: &PostingSet) -> Vec<usize> {
    let mut ids: Vec<usize> = set.iter().map(|id| id.index()).collect();
    ids.sort_unstable();
    ids
}

/// Every id of a store, as a posting set.
#[allow(dead_code)]
pub fn all_ids(store: &RecordStore) -> PostingSet {
    RecordId::range(store.len()).collect()
}
