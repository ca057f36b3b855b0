//! Common types used throughout resilient-pager
//!
//! This module contains shared type definitions, type aliases,
//! and argument helpers used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

// ============================================================================
// Type Aliases
// ============================================================================

/// Stable positional key assigned to a record at load time
pub type RecordKey = usize;

// ============================================================================
// Record
// ============================================================================

/// A single row of the dataset
///
/// Fields are kept in source order and never interpreted by the paginators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    /// Create a record from its fields
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Get the fields of this record
    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

impl Deref for Record {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl From<Vec<&str>> for Record {
    fn from(fields: Vec<&str>) -> Self {
        Self(fields.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Record {
    fn from(fields: [&str; N]) -> Self {
        Self(fields.iter().map(|s| (*s).to_string()).collect())
    }
}

// ============================================================================
// Argument Defaults & Validation
// ============================================================================

/// Default page number for offset pagination
pub const DEFAULT_PAGE: i64 = 1;

/// Default start key for resilient pagination
pub const DEFAULT_INDEX: i64 = 0;

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Require `value >= 1`, returning it as a `usize`
pub fn require_positive(argument: &str, value: i64) -> Result<usize> {
    if value < 1 {
        return Err(Error::invalid_argument(
            argument,
            format!("must be a positive integer, got {value}"),
        ));
    }
    usize::try_from(value)
        .map_err(|_| Error::invalid_argument(argument, format!("{value} is out of range")))
}

/// Require `value >= 0`, returning it as a `usize`
pub fn require_non_negative(argument: &str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(Error::invalid_argument(
            argument,
            format!("must be a non-negative integer, got {value}"),
        ));
    }
    usize::try_from(value)
        .map_err(|_| Error::invalid_argument(argument, format!("{value} is out of range")))
}

/// Parse an integer argument supplied as text (query strings, CLI input)
///
/// Anything that is not a base-10 integer is an `InvalidArgument`.
pub fn parse_int_arg(argument: &str, text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| {
        Error::invalid_argument(argument, format!("expected an integer, got '{text}'"))
    })
}
