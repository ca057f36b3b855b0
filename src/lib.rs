// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Resilient Pager
//!
//! Pagination over a static tabular dataset, in two styles:
//!
//! - **Offset**: 1-indexed page number and page size, sliced by position
//! - **Index**: start at a stable record key and follow `next_index`,
//!   unaffected by records removed before the current window
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resilient_pager::{loader::CsvFileSource, Session, Result};
//!
//! fn main() -> Result<()> {
//!     let session = Session::new(CsvFileSource::new("Popular_Baby_Names.csv"));
//!
//!     let page = session.get_page(3, 15)?;
//!     let hyper = session.get_hyper_index(0, 10)?;
//!     let next = session.get_hyper_index(hyper.next_index.unwrap_or(0) as i64, 10)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌─────────────┐    ┌───────────────┐
//! │ RecordSource │ ─▶ │ RecordStore │ ─▶ │ PositionIndex │
//! │ (CSV, memory)│    │ (header cut)│    │ (stable keys) │
//! └──────────────┘    └──────┬──────┘    └───────┬───────┘
//!                            │                   │
//!                   ┌────────▼────────┐ ┌────────▼─────────┐
//!                   │ OffsetPaginator │ │ResilientPaginator│
//!                   │ get_page/hyper  │ │ get_hyper_index  │
//!                   └─────────────────┘ └──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and argument helpers
pub mod types;

/// Record store and position index
pub mod store;

/// Offset and index pagination
pub mod pagination;

/// Row decoders (CSV)
pub mod decode;

/// Record sources
pub mod loader;

/// Lazily loaded pagination session
pub mod session;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use pagination::{
    index_range, HyperIndexPage, HyperPage, OffsetPaginator, ResilientPaginator,
};
pub use session::Session;
pub use store::{PositionIndex, RecordStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
