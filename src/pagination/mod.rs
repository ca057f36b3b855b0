//! Pagination module
//!
//! Supports: Offset (page number + page size), Hypermedia page metadata,
//! and deletion-resilient Index pagination.
//!
//! # Overview
//!
//! Offset pagination slices the record store by position and is simple but
//! shifts when records disappear. Index pagination walks the stable
//! [`PositionIndex`](crate::store::PositionIndex) from a caller-supplied key,
//! skipping gaps, and hands back the key to request next.

mod strategies;
mod types;

pub use strategies::{index_range, OffsetPaginator, ResilientPaginator};
pub use types::{HyperIndexPage, HyperPage};
