//! Record store types

use crate::types::Record;
use serde::Serialize;

/// Ordered, immutable sequence of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a store from data rows (no header)
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Create a store from raw source rows, dropping the leading header row
    pub fn from_rows_with_header(rows: Vec<Record>) -> Self {
        let records = rows.into_iter().skip(1).collect();
        Self { records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at a position
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Half-open slice `[start, end)`, truncated to the store length
    ///
    /// Returns an empty slice when `start` is at or past the end.
    pub fn slice(&self, start: usize, end: usize) -> &[Record] {
        let len = self.records.len();
        if start >= len {
            return &[];
        }
        &self.records[start..end.min(len)]
    }

    /// Iterate records in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
