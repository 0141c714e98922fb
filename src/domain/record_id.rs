//! RecordId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for record ids.
///
/// A record's id is its zero-based position in ingestion order, so ids
/// double as indexes into the record list and sort in ingestion order.
///
/// # Example
///
/// ```
/// use people_finder::domain::RecordId;
///
/// let id = RecordId::new(2);
/// assert_eq!(id.index(), 2);
/// assert!(RecordId::new(0) < id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(usize);

impl RecordId {
    /// Create a RecordId from a zero-based position.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the position this id refers to.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Iterate over every id in `0..count`.
    pub fn range(count: usize) -> impl Iterator<Item = RecordId> {
        (0..count).map(RecordId)
    }
}

// Display support
impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
