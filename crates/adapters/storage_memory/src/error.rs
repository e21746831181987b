//! Storage-specific error type.

use twinsvc_domain::error::TwinSvcError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A thread panicked while holding the collection lock.
    #[error("record collection lock poisoned")]
    Poisoned,

    /// The `i32` identifier space is used up.
    #[error("no identifiers left after {last}")]
    IdsExhausted { last: i32 },
}

impl From<StorageError> for TwinSvcError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
