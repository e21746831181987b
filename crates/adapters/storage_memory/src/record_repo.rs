//! In-memory implementation of [`RecordRepository`].

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use twinsvc_app::ports::RecordRepository;
use twinsvc_domain::error::TwinSvcError;
use twinsvc_domain::id::RecordId;
use twinsvc_domain::record::Record;

use crate::error::StorageError;

struct Inner<T> {
    records: Vec<T>,
    last_id: Option<RecordId>,
}

/// Process-local record collection.
///
/// Identifier assignment and the append happen under a single lock
/// acquisition, so concurrent creates always get distinct, increasing ids.
pub struct InMemoryRepository<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> InMemoryRepository<T> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                last_id: None,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner<T>>, StorageError> {
        self.inner.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRepository<T> {
    fn insert(&self, draft: T::Draft) -> Result<T, StorageError> {
        let mut inner = self.lock()?;
        let id = match inner.last_id {
            None => RecordId::FIRST,
            Some(last) => last
                .checked_next()
                .ok_or(StorageError::IdsExhausted { last: last.get() })?,
        };
        let record = T::from_draft(id, draft);
        inner.records.push(record.clone());
        inner.last_id = Some(id);
        tracing::trace!(collection = T::COLLECTION, %id, "record appended");
        Ok(record)
    }
}

impl<T: Record> RecordRepository for InMemoryRepository<T> {
    type Record = T;

    fn create(&self, draft: T::Draft) -> impl Future<Output = Result<T, TwinSvcError>> + Send {
        let result = self.insert(draft).map_err(TwinSvcError::from);
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<T>, TwinSvcError>> + Send {
        let result = self
            .lock()
            .map(|inner| inner.records.clone())
            .map_err(TwinSvcError::from);
        async move { result }
    }

    fn count(&self) -> impl Future<Output = Result<usize, TwinSvcError>> + Send {
        let result = self
            .lock()
            .map(|inner| inner.records.len())
            .map_err(TwinSvcError::from);
        async move { result }
    }
}
