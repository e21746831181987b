//! The contract shared by every stored entity type.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::id::RecordId;

/// An entity held in a service's collection.
///
/// A record is built from its caller-supplied [`Draft`](Record::Draft) plus
/// an identifier the store assigns. Records are never mutated or deleted
/// once stored.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Caller-supplied fields. Carries no identifier, so any `Id` sent by a
    /// client is dropped during deserialization.
    type Draft: DeserializeOwned + Send + 'static;

    /// Route segment the collection is served under (`products`, `orders`).
    const COLLECTION: &'static str;

    /// Combine a draft with its assigned identifier.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// The store-assigned identifier.
    fn id(&self) -> RecordId;
}
