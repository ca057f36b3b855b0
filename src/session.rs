//! Pagination session
//!
//! A [`Session`] owns a record source and lazily builds, once, the record
//! store and the position index over it. Both are then read without further
//! synchronization for the session's lifetime.

use crate::error::Result;
use crate::loader::RecordSource;
use crate::pagination::{HyperIndexPage, HyperPage, OffsetPaginator, ResilientPaginator};
use crate::store::{PositionIndex, RecordStore};
use crate::types::Record;
use once_cell::sync::OnceCell;
use std::fmt;

/// Lazily loaded dataset plus its paginators
pub struct Session {
    source: Box<dyn RecordSource>,
    dataset: OnceCell<RecordStore>,
    indexed: OnceCell<PositionIndex>,
}

impl Session {
    /// Create a session over a record source; nothing is read yet
    pub fn new(source: impl RecordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            dataset: OnceCell::new(),
            indexed: OnceCell::new(),
        }
    }

    /// Install a pre-built position index, e.g. one with keys removed
    ///
    /// Index pagination then reads this index instead of building one from
    /// the dataset.
    #[must_use]
    pub fn with_index(self, index: PositionIndex) -> Self {
        Self {
            indexed: OnceCell::with_value(index),
            ..self
        }
    }

    /// Cached dataset, header row excluded
    ///
    /// The source is read at most once, even when called from several threads.
    pub fn dataset(&self) -> Result<&RecordStore> {
        self.dataset.get_or_try_init(|| {
            let rows = self.source.read_rows()?;
            let store = RecordStore::from_rows_with_header(rows);
            tracing::debug!(
                source = %self.source.describe(),
                records = store.len(),
                "dataset loaded"
            );
            Ok(store)
        })
    }

    /// Cached position index over the dataset
    pub fn indexed_dataset(&self) -> Result<&PositionIndex> {
        self.indexed.get_or_try_init(|| {
            let index = PositionIndex::build(self.dataset()?);
            tracing::debug!(keys = index.len(), "position index built");
            Ok(index)
        })
    }

    /// Offset paginator over the cached dataset
    pub fn offset(&self) -> Result<OffsetPaginator<'_>> {
        Ok(OffsetPaginator::new(self.dataset()?))
    }

    /// Resilient paginator over the cached index
    pub fn resilient(&self) -> Result<ResilientPaginator<'_>> {
        Ok(ResilientPaginator::new(self.indexed_dataset()?))
    }

    /// See [`OffsetPaginator::get_page`]
    pub fn get_page(&self, page: i64, page_size: i64) -> Result<Vec<Record>> {
        self.offset()?.get_page(page, page_size)
    }

    /// See [`OffsetPaginator::get_hyper`]
    pub fn get_hyper(&self, page: i64, page_size: i64) -> Result<HyperPage> {
        self.offset()?.get_hyper(page, page_size)
    }

    /// See [`ResilientPaginator::get_hyper_index`]
    pub fn get_hyper_index(&self, index: i64, page_size: i64) -> Result<HyperIndexPage> {
        self.resilient()?.get_hyper_index(index, page_size)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("source", &self.source.describe())
            .field("dataset_loaded", &self.dataset.get().is_some())
            .field("index_built", &self.indexed.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::loader::InMemorySource;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Source that counts how many times it is read
    struct CountingSource {
        reads: Arc<AtomicUsize>,
        rows: Vec<Record>,
    }

    impl RecordSource for CountingSource {
        fn read_rows(&self) -> Result<Vec<Record>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.clone())
        }
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn read_rows(&self) -> Result<Vec<Record>> {
            Err(Error::file_not_found("nowhere.csv"))
        }
    }

    fn rows(n: usize) -> Vec<Record> {
        let mut rows = vec![Record::from(["Year", "Name"])];
        rows.extend((0..n).map(|i| Record::new(vec!["2016".to_string(), format!("n{i}")])));
        rows
    }

    #[test]
    fn test_dataset_skips_header() {
        let session = Session::new(InMemorySource::new(rows(3)));
        let dataset = session.dataset().unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(0), Some(&Record::from(["2016", "n0"])));
    }

    #[test]
    fn test_source_read_once() {
        let reads = Arc::new(AtomicUsize::new(0));
        let session = Session::new(CountingSource {
            reads: Arc::clone(&reads),
            rows: rows(20),
        });

        session.get_page(1, 5).unwrap();
        session.get_page(2, 5).unwrap();
        session.get_hyper_index(0, 5).unwrap();
        session.indexed_dataset().unwrap();

        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_access_reads_once() {
        let reads = Arc::new(AtomicUsize::new(0));
        let session = Arc::new(Session::new(CountingSource {
            reads: Arc::clone(&reads),
            rows: rows(50),
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let session = Arc::clone(&session);
                std::thread::spawn(move || session.get_hyper_index(0, 10).unwrap().page_size)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 10);
        }
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_load_failure_propagates() {
        let session = Session::new(FailingSource);
        assert!(matches!(
            session.get_page(1, 10).unwrap_err(),
            Error::FileNotFound { .. }
        ));
        assert!(session.get_hyper_index(0, 10).is_err());
    }

    #[test]
    fn test_with_index_uses_gapped_index() {
        let session = Session::new(InMemorySource::new(rows(10)));
        let gapped = session.indexed_dataset().unwrap().without([5]);
        let session = Session::new(InMemorySource::new(rows(10))).with_index(gapped);

        let page = session.get_hyper_index(4, 3).unwrap();
        let keys: Vec<_> = page.data.iter().map(|r| r[1].clone()).collect();
        assert_eq!(keys, vec!["n4", "n6", "n7"]);
        assert_eq!(page.next_index, Some(8));

        assert_eq!(session.get_hyper_index(5, 3).unwrap().page_size, 0);
        // Offset pagination still reads the full dataset
        assert_eq!(session.get_page(1, 10).unwrap().len(), 10);
    }

    #[test]
    fn test_with_index_replaces_built_index() {
        let session = Session::new(InMemorySource::new(rows(4)));
        session.indexed_dataset().unwrap();
        assert!(format!("{session:?}").contains("index_built: true"));

        let gapped = PositionIndex::from(rows(4)[1..].to_vec()).without([0, 1]);
        let session = session.with_index(gapped.clone());
        assert_eq!(session.indexed_dataset().unwrap(), &gapped);
        assert_eq!(session.get_hyper_index(0, 2).unwrap().page_size, 0);
        assert_eq!(session.get_hyper_index(2, 2).unwrap().data.len(), 2);
    }

    #[test]
    fn test_debug_reports_load_state() {
        let session = Session::new(InMemorySource::new(rows(1)));
        assert!(format!("{session:?}").contains("dataset_loaded: false"));
        session.dataset().unwrap();
        assert!(format!("{session:?}").contains("dataset_loaded: true"));
    }
}
