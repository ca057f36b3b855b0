//! Decoder implementations

use crate::error::{Error, Result};
use crate::types::Record;

// ============================================================================
// CSV Decoder
// ============================================================================

/// CSV decoder
///
/// Fields are kept verbatim apart from quote removal; nothing is trimmed or
/// converted. A quoted field may span lines. A blank line decodes to a record
/// with no fields, so row positions match the line structure of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDecoder {
    /// Field delimiter
    delimiter: char,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvDecoder {
    /// Create a new CSV decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV decoder with a custom delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Decode every row of `body`, header included
    pub fn decode(&self, body: &str) -> Result<Vec<Record>> {
        let mut rows = Vec::new();
        let mut row = RowBuilder::default();
        let mut in_quotes = false;
        let mut line = 1;
        let mut row_line = 1;
        let mut chars = body.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                if c == '"' {
                    // Check for escaped quote
                    if chars.peek() == Some(&'"') {
                        row.current.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    if c == '\n' {
                        line += 1;
                    }
                    row.current.push(c);
                }
                continue;
            }

            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' => {
                    rows.push(row.finish());
                    line += 1;
                    row_line = line;
                }
                '"' => {
                    row.touched = true;
                    in_quotes = true;
                }
                c if c == self.delimiter => {
                    row.touched = true;
                    row.end_field();
                }
                c => {
                    row.touched = true;
                    row.current.push(c);
                }
            }
        }

        if in_quotes {
            return Err(Error::csv_parse(format!(
                "line {row_line}: unterminated quoted field"
            )));
        }
        // Final row without a trailing newline
        if row.touched {
            rows.push(row.finish());
        }

        Ok(rows)
    }
}

/// Fields of the row being decoded
#[derive(Debug, Default)]
struct RowBuilder {
    fields: Vec<String>,
    current: String,
    touched: bool,
}

impl RowBuilder {
    fn end_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.current));
    }

    /// Emit the row and reset; an untouched row is a blank line
    fn finish(&mut self) -> Record {
        if !std::mem::take(&mut self.touched) {
            return Record::default();
        }
        self.end_field();
        Record::new(std::mem::take(&mut self.fields))
    }
}
