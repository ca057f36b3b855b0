//! Pagination result types
//!
//! These are the shapes handed back to callers and serialized by the HTTP layer.

use crate::types::{Record, RecordKey};
use serde::{Deserialize, Serialize};

/// Page-number hypermedia page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperPage {
    /// Number of records actually returned
    pub page_size: usize,
    /// Requested page number (1-indexed)
    pub page: usize,
    /// Records on this page
    pub data: Vec<Record>,
    /// Next page number, if there is one
    pub next_page: Option<usize>,
    /// Previous page number, if there is one
    pub prev_page: Option<usize>,
    /// Total number of pages at the requested page size
    pub total_pages: usize,
}

/// Deletion-resilient page keyed by stable index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperIndexPage {
    /// Requested start key, echoed back
    pub index: RecordKey,
    /// Key to request next (`last returned key + 1`), absent when nothing was returned
    pub next_index: Option<RecordKey>,
    /// Number of records actually returned
    pub page_size: usize,
    /// Records on this page
    pub data: Vec<Record>,
}

impl HyperIndexPage {
    /// Page for a start key that is not present in the index
    pub fn not_found(index: RecordKey) -> Self {
        Self {
            index,
            next_index: None,
            page_size: 0,
            data: Vec::new(),
        }
    }

    /// Check if this page carries no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
