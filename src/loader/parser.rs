//! CSV file source
//!
//! Reads a CSV file from disk and decodes it into rows.

use super::types::RecordSource;
use crate::decode::CsvDecoder;
use crate::error::{Error, Result};
use crate::types::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// Default dataset file name
pub const DEFAULT_DATA_FILE: &str = "Popular_Baby_Names.csv";

/// CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    decoder: CsvDecoder,
}

impl CsvFileSource {
    /// Create a source reading comma-separated values from `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            decoder: CsvDecoder::new(),
        }
    }

    /// Use a custom decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: CsvDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CsvFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl RecordSource for CsvFileSource {
    fn read_rows(&self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(self.path.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;
        self.decoder.decode(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
