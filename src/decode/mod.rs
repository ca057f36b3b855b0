//! Row decoder module
//!
//! Supports: CSV (configurable delimiter, double-quote escaping)
//!
//! # Overview
//!
//! Decoders turn raw source text into [`Record`](crate::types::Record) rows.
//! Every row is returned, including any header; dropping the header is the
//! record store's job.

mod decoders;

pub use decoders::CsvDecoder;
