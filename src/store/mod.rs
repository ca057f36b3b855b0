//! Dataset storage module
//!
//! Holds the loaded rows and the stable positional index built over them.
//!
//! # Overview
//!
//! A [`RecordStore`] is the ordered, immutable sequence of records read once
//! from a source. A [`PositionIndex`] maps each record's load-time position to
//! the record itself so that positions stay valid even when some keys are
//! later missing from the index.

mod index;
mod types;

pub use index::PositionIndex;
pub use types::RecordStore;
