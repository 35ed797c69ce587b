//! Search results as returned by the remote search endpoint.

use serde::{Deserialize, Serialize};

/// An ordered page of matching object ids plus the authoritative total.
///
/// The id order is the remote service's ranking and is treated as
/// opaque; duplicates are not ruled out. `total` may exceed
/// `object_ids.len()` when the service paginates server-side - this
/// system only ever consumes the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHits {
    /// Matching object ids in remote ranking order
    pub object_ids: Vec<u64>,
    /// Total matches declared by the service (0 when absent)
    pub total: u64,
}

impl SearchHits {
    /// Number of ids actually returned on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.object_ids.len()
    }

    /// Whether the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.object_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hits() {
        let hits = SearchHits::default();
        assert!(hits.is_empty());
        assert_eq!(hits.len(), 0);
        assert_eq!(hits.total, 0);
    }

    #[test]
    fn test_total_may_exceed_page() {
        let hits = SearchHits {
            object_ids: vec![10, 20, 30],
            total: 4821,
        };
        assert_eq!(hits.len(), 3);
        assert!(hits.total >= hits.len() as u64);
    }
}
