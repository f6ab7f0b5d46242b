//! Read-only video catalog, seeded at process start.

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::types::VideoRecord;

/// Process-wide catalog instance, built on first access.
static SHARED: Lazy<Arc<VideoStore>> = Lazy::new(|| Arc::new(VideoStore::seeded()));

/// Get the shared seeded catalog.
pub fn shared() -> Arc<VideoStore> {
    Arc::clone(&SHARED)
}

/// Immutable in-memory video catalog keyed by id.
///
/// The record set is fixed at construction; there are no create, update, or
/// delete operations.
#[derive(Debug, Clone)]
pub struct VideoStore {
    records: BTreeMap<String, VideoRecord>,
}

impl VideoStore {
    /// Build the catalog with the fixed sample records.
    pub fn seeded() -> Self {
        Self::with_records([
            VideoRecord::new("1", "Video 1"),
            VideoRecord::new("2", "Video 2"),
        ])
    }

    /// Build a catalog from the given records.
    pub fn with_records(records: impl IntoIterator<Item = VideoRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id.clone(), record))
                .collect(),
        }
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&VideoRecord> {
        self.records.get(id)
    }

    /// Iterate over all records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &VideoRecord> {
        self.records.values()
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_store_holds_the_two_sample_records() {
        let store = VideoStore::seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("1").unwrap().title, "Video 1");
        assert_eq!(store.get("2").unwrap().title, "Video 2");
    }

    #[test]
    fn get_misses_for_unknown_id() {
        let store = VideoStore::seeded();
        assert!(store.get("3").is_none());
        assert!(store.get("").is_none());
        assert!(store.get("video-1").is_none());
    }

    #[test]
    fn iter_yields_ascending_id_order() {
        let store = VideoStore::with_records([
            VideoRecord::new("2", "Second"),
            VideoRecord::new("1", "First"),
        ]);
        let ids: Vec<&str> = store.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn shared_returns_the_same_instance() {
        let a = shared();
        let b = shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn empty_store_is_empty() {
        let store = VideoStore::with_records([]);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
