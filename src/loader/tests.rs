//! Tests for loader module

use super::*;
use crate::decode::CsvDecoder;
use crate::error::Error;
use crate::types::Record;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_in_memory_source_returns_rows() {
    let source = InMemorySource::with_header(
        Record::from(["Year", "Name"]),
        vec![Record::from(["2016", "Olivia"])],
    );

    let rows = source.read_rows().unwrap();
    assert_eq!(
        rows,
        vec![Record::from(["Year", "Name"]), Record::from(["2016", "Olivia"])]
    );
    assert_eq!(source.describe(), "in-memory (2 rows)");
}

#[test]
fn test_csv_file_source_reads_file() {
    let file = write_csv("Year,Name\n2016,Olivia\n2016,Chloe\n");
    let source = CsvFileSource::new(file.path());

    let rows = source.read_rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], Record::from(["2016", "Chloe"]));
}

#[test]
fn test_csv_file_source_custom_delimiter() {
    let file = write_csv("Year;Name\n2016;Olivia\n");
    let source = CsvFileSource::new(file.path()).with_decoder(CsvDecoder::with_delimiter(';'));

    let rows = source.read_rows().unwrap();
    assert_eq!(rows[1], Record::from(["2016", "Olivia"]));
}

#[test]
fn test_csv_file_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = CsvFileSource::new(dir.path().join("missing.csv"));

    let err = source.read_rows().unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_csv_file_source_default_path() {
    let source = CsvFileSource::default();
    assert_eq!(source.path(), std::path::Path::new("Popular_Baby_Names.csv"));
}
