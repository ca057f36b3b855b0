//! Stable positional index
//!
//! Keys are assigned once, at build time, as the 0-based load position of each
//! record. The index is never re-keyed: removing a key leaves a gap.

use super::types::RecordStore;
use crate::types::{Record, RecordKey};
use std::collections::BTreeMap;

/// Mapping from stable key to record, iterated in ascending key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    entries: BTreeMap<RecordKey, Record>,
}

impl PositionIndex {
    /// Build the index `k -> store[k]` for every position in the store
    pub fn build(store: &RecordStore) -> Self {
        let entries = store.iter().cloned().enumerate().collect();
        Self { entries }
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no keys are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a key is present
    pub fn contains(&self, key: RecordKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Get the record stored under a key
    pub fn get(&self, key: RecordKey) -> Option<&Record> {
        self.entries.get(&key)
    }

    /// Present keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = RecordKey> + '_ {
        self.entries.keys().copied()
    }

    /// Largest present key
    pub fn max_key(&self) -> Option<RecordKey> {
        self.entries.keys().next_back().copied()
    }

    /// Entries with key `>= start`, in ascending key order
    pub fn entries_from(
        &self,
        start: RecordKey,
    ) -> impl Iterator<Item = (RecordKey, &Record)> + '_ {
        self.entries.range(start..).map(|(k, r)| (*k, r))
    }

    /// Drop a key, leaving a gap in the key sequence
    ///
    /// Remaining keys keep their original values.
    pub fn remove(&mut self, key: RecordKey) -> Option<Record> {
        self.entries.remove(&key)
    }

    /// Copy of this index with the given keys removed
    #[must_use]
    pub fn without(&self, keys: impl IntoIterator<Item = RecordKey>) -> Self {
        let mut index = self.clone();
        for key in keys {
            index.remove(key);
        }
        index
    }
}

impl From<&RecordStore> for PositionIndex {
    fn from(store: &RecordStore) -> Self {
        Self::build(store)
    }
}

impl From<Vec<Record>> for PositionIndex {
    fn from(records: Vec<Record>) -> Self {
        Self {
            entries: records.into_iter().enumerate().collect(),
        }
    }
}
