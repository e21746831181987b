//! Storage port — repository trait for a single record collection.

use std::future::Future;

use twinsvc_domain::error::TwinSvcError;
use twinsvc_domain::record::Record;

/// Append-only collection of one record type.
///
/// Implementations own the identifier sequence: [`create`](Self::create)
/// must hand out unique, strictly increasing ids even when called
/// concurrently.
pub trait RecordRepository {
    /// The record type held by this collection.
    type Record: Record;

    /// Assign the next identifier to `draft`, append it, and return the stored record.
    fn create(
        &self,
        draft: <Self::Record as Record>::Draft,
    ) -> impl Future<Output = Result<Self::Record, TwinSvcError>> + Send;

    /// Every stored record, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Self::Record>, TwinSvcError>> + Send;

    /// Number of stored records.
    fn count(&self) -> impl Future<Output = Result<usize, TwinSvcError>> + Send;
}
