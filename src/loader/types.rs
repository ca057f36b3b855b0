//! Record source types and traits

use crate::error::Result;
use crate::types::Record;

/// Supplier of the full ordered row sequence, header first
pub trait RecordSource: Send + Sync {
    /// Read every row, including the header
    fn read_rows(&self) -> Result<Vec<Record>>;

    /// Human-readable description used in logs
    fn describe(&self) -> String {
        "records".to_string()
    }
}

/// Rows already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    rows: Vec<Record>,
}

impl InMemorySource {
    /// Create a source from rows (header first)
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    /// Create a source from a header and data rows
    pub fn with_header(header: Record, data: impl IntoIterator<Item = Record>) -> Self {
        let mut rows = vec![header];
        rows.extend(data);
        Self { rows }
    }
}

impl RecordSource for InMemorySource {
    fn read_rows(&self) -> Result<Vec<Record>> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.rows.len())
    }
}
