//! Record source module
//!
//! Supplies the raw rows a [`Session`](crate::session::Session) loads once.
//!
//! # Overview
//!
//! A [`RecordSource`] returns every row of the dataset in order, the first
//! row being the header. [`CsvFileSource`] reads a CSV file from disk;
//! [`InMemorySource`] wraps rows that are already resident.

mod parser;
mod types;

pub use parser::{CsvFileSource, DEFAULT_DATA_FILE};
pub use types::{InMemorySource, RecordSource};

#[cfg(test)]
mod tests;
