//! Boolean matching strategies over the inverted index.
//!
//! Each strategy maps a query and the current record count to the set of
//! matching record ids. Strategies only read the index.

use super::inverted_index::{InvertedIndex, PostingSet};
use super::tokenizer::tokenize;
use crate::domain::RecordId;
use crate::error::SearchError;
use std::fmt;
use std::str::FromStr;

/// A query matching policy.
pub trait SearchStrategy: fmt::Debug + Send + Sync {
    /// Compute the ids of the records matching `query`.
    ///
    /// `record_count` must equal the number of records that were ingested
    /// into `index`; every returned id is below it.
    fn matching_ids(&self, index: &InvertedIndex, query: &str, record_count: usize) -> PostingSet;
}

/// Matches records containing at least one query word.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyWordMatch;

impl SearchStrategy for AnyWordMatch {
    fn matching_ids(
        &self,
        index: &InvertedIndex,
        query: &str,
        _record_count: usize,
    ) -> PostingSet {
        tokenize(query)
            .flat_map(move |word| index.lookup(&word).iter().copied())
            .collect()
    }
}

/// Matches records containing every query word.
///
/// A query without words matches nothing, as does any query containing a
/// word that was never indexed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllWordMatch;

impl SearchStrategy for AllWordMatch {
    fn matching_ids(
        &self,
        index: &InvertedIndex,
        query: &str,
        _record_count: usize,
    ) -> PostingSet {
        let mut words = tokenize(query);
        let Some(first) = words.next() else {
            return PostingSet::new();
        };

        let mut result = index.lookup(&first).clone();
        for word in words {
            // Once empty, intersecting further cannot bring anything back.
            if result.is_empty() {
                break;
            }
            let postings = index.lookup(&word);
            result.retain(|id| postings.contains(id));
        }
        result
    }
}

/// Matches records containing none of the query words.
///
/// This is the complement of [`AnyWordMatch`] within `0..record_count`, so a
/// query without known words matches every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneWordMatch;

impl SearchStrategy for NoneWordMatch {
    fn matching_ids(
        &self,
        index: &InvertedIndex,
        query: &str,
        record_count: usize,
    ) -> PostingSet {
        let excluded = AnyWordMatch.matching_ids(index, query, record_count);
        RecordId::range(record_count)
            .filter(|id| !excluded.contains(id))
            .collect()
    }
}

/// Selectable strategy identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Every query word must match
    All,
    /// At least one query word must match
    Any,
    /// No query word may match
    None,
}

impl StrategyKind {
    /// All strategy kinds in display order.
    pub const ALL_KINDS: [StrategyKind; 3] = [Self::All, Self::Any, Self::None];

    /// Get the identifier users type to select this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Any => "ANY",
            Self::None => "NONE",
        }
    }

    /// Resolve the strategy implementation.
    pub fn strategy(&self) -> &'static dyn SearchStrategy {
        match self {
            Self::All => &AllWordMatch,
            Self::Any => &AnyWordMatch,
            Self::None => &NoneWordMatch,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        Self::ALL_KINDS
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(selector))
            .ok_or_else(|| SearchError::InvalidStrategy(selector.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index.ingest(RecordId::new(0), "Alice Smith alice@x.com");
        index.ingest(RecordId::new(1), "Bob Jones bob@x.com");
        index.ingest(RecordId::new(2), "Alice Bob shared@x.com");
        index
    }

    fn sorted(set: PostingSet) -> Vec<usize> {
        let mut ids: Vec<usize> = set.into_iter().map(RecordId::index).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_any_word_match_unions() {
        let index = sample_index();
        assert_eq!(sorted(AnyWordMatch.matching_ids(&index, "alice", 3)), vec![0, 2]);
        assert_eq!(sorted(AnyWordMatch.matching_ids(&index, "smith jones", 3)), vec![0, 1]);
    }

    #[test]
    fn test_any_word_match_ignores_unknown_words() {
        let index = sample_index();
        assert_eq!(sorted(AnyWordMatch.matching_ids(&index, "zzz JONES", 3)), vec![1]);
        assert!(AnyWordMatch.matching_ids(&index, "zzz", 3).is_empty());
        assert!(AnyWordMatch.matching_ids(&index, "", 3).is_empty());
    }

    #[test]
    fn test_all_word_match_intersects() {
        let index = sample_index();
        assert_eq!(sorted(AllWordMatch.matching_ids(&index, "alice bob", 3)), vec![2]);
        assert_eq!(sorted(AllWordMatch.matching_ids(&index, "ALICE", 3)), vec![0, 2]);
    }

    #[test]
    fn test_all_word_match_unknown_word_empties_result() {
        let index = sample_index();
        assert!(AllWordMatch.matching_ids(&index, "zzz alice", 3).is_empty());
        assert!(AllWordMatch.matching_ids(&index, "alice zzz", 3).is_empty());
        assert!(AllWordMatch.matching_ids(&index, "smith jones alice", 3).is_empty());
    }

    #[test]
    fn test_all_word_match_empty_query_matches_nothing() {
        let index = sample_index();
        assert!(AllWordMatch.matching_ids(&index, "", 3).is_empty());
        assert!(AllWordMatch.matching_ids(&index, "   ", 3).is_empty());
    }

    #[test]
    fn test_none_word_match_complements_any() {
        let index = sample_index();
        assert_eq!(sorted(NoneWordMatch.matching_ids(&index, "alice", 3)), vec![1]);
        assert_eq!(sorted(NoneWordMatch.matching_ids(&index, "alice bob", 3)), Vec::<usize>::new());
    }

    #[test]
    fn test_none_word_match_without_known_words_matches_everyone() {
        let index = sample_index();
        assert_eq!(sorted(NoneWordMatch.matching_ids(&index, "", 3)), vec![0, 1, 2]);
        assert_eq!(sorted(NoneWordMatch.matching_ids(&index, "zzz", 3)), vec![0, 1, 2]);
    }

    #[test]
    fn test_none_word_match_empty_store() {
        let index = InvertedIndex::new();
        assert!(NoneWordMatch.matching_ids(&index, "alice", 0).is_empty());
    }

    #[test]
    fn test_strategy_kind_parsing() {
        assert_eq!("ALL".parse::<StrategyKind>(), Ok(StrategyKind::All));
        assert_eq!(" any ".parse::<StrategyKind>(), Ok(StrategyKind::Any));
        assert_eq!("None".parse::<StrategyKind>(), Ok(StrategyKind::None));
    }

    #[test]
    fn test_strategy_kind_rejects_unknown_selector() {
        assert_eq!(
            "SOME".parse::<StrategyKind>(),
            Err(SearchError::InvalidStrategy("SOME".to_string()))
        );
        assert!("".parse::<StrategyKind>().is_err());
        assert!("1".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_strategy_kind_display_round_trips() {
        for kind in StrategyKind::ALL_KINDS {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_strategy_kind_resolves_implementation() {
        let index = sample_index();
        let any = StrategyKind::Any.strategy().matching_ids(&index, "bob", 3);
        assert_eq!(sorted(any), vec![1, 2]);
    }
}
