//! Pagination strategy implementations
//!
//! Each strategy borrows the structure it reads from; none of them mutate it.

use super::types::{HyperIndexPage, HyperPage};
use crate::error::Result;
use crate::store::{PositionIndex, RecordStore};
use crate::types::{require_non_negative, require_positive, Record};

// ============================================================================
// Page Window
// ============================================================================

/// Half-open window `[start, end)` for a 1-indexed page
///
/// `end` is not clamped to any dataset length. A window beyond `usize::MAX`
/// saturates, which still lies past the end of any dataset.
pub fn index_range(page: i64, page_size: i64) -> Result<(usize, usize)> {
    let page = require_positive("page", page)?;
    let page_size = require_positive("page_size", page_size)?;
    let start = (page - 1).saturating_mul(page_size);
    Ok((start, start.saturating_add(page_size)))
}

// ============================================================================
// Offset Pagination
// ============================================================================

/// Offset pagination over the record store
///
/// Uses a 1-indexed page number and a page size.
/// Common patterns:
/// - `?page=2&page_size=10`
#[derive(Debug, Clone, Copy)]
pub struct OffsetPaginator<'a> {
    store: &'a RecordStore,
}

impl<'a> OffsetPaginator<'a> {
    /// Create a new offset paginator
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Records for a page, empty when the page starts past the end
    pub fn get_page(&self, page: i64, page_size: i64) -> Result<Vec<Record>> {
        let (start, end) = index_range(page, page_size)?;
        Ok(self.store.slice(start, end).to_vec())
    }

    /// Records for a page plus navigation metadata
    pub fn get_hyper(&self, page: i64, page_size: i64) -> Result<HyperPage> {
        let data = self.get_page(page, page_size)?;
        let page = require_positive("page", page)?;
        let page_size = require_positive("page_size", page_size)?;

        let total_pages = self.store.len().div_ceil(page_size);

        Ok(HyperPage {
            page_size: data.len(),
            page,
            data,
            next_page: (page < total_pages).then_some(page + 1),
            prev_page: (page > 1).then(|| page - 1),
            total_pages,
        })
    }
}

// ============================================================================
// Index Pagination
// ============================================================================

/// Deletion-resilient pagination over the stable position index
///
/// The caller passes back `next_index` from the previous page. If records
/// before that key were dropped in between, nothing is skipped or repeated.
/// A start key that fell into a gap yields an empty page.
#[derive(Debug, Clone, Copy)]
pub struct ResilientPaginator<'a> {
    index: &'a PositionIndex,
}

impl<'a> ResilientPaginator<'a> {
    /// Create a new resilient paginator
    pub fn new(index: &'a PositionIndex) -> Self {
        Self { index }
    }

    /// Page of up to `page_size` records starting at key `index`
    ///
    /// `next_index` is always `last returned key + 1`, even at the end of the
    /// data; the follow-up request then comes back empty.
    pub fn get_hyper_index(&self, index: i64, page_size: i64) -> Result<HyperIndexPage> {
        let start = require_non_negative("index", index)?;
        let page_size = require_positive("page_size", page_size)?;

        if !self.index.contains(start) {
            tracing::debug!(index = start, "start key not present in index");
            return Ok(HyperIndexPage::not_found(start));
        }

        let mut data = Vec::with_capacity(page_size.min(self.index.len()));
        let mut next_index = None;

        for (key, record) in self.index.entries_from(start).take(page_size) {
            data.push(record.clone());
            next_index = Some(key + 1);
        }

        Ok(HyperIndexPage {
            index: start,
            next_index,
            page_size: data.len(),
            data,
        })
    }
}
