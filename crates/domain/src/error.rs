//! Common error types used across the workspace.
//!
//! Records carry no validation rules and are never looked up by id, so the
//! only failure a use-case can surface is one raised by the storage layer.
//! Adapters keep their own typed errors and convert into [`TwinSvcError`].

/// Top-level error returned by ports and application services.
#[derive(Debug, thiserror::Error)]
pub enum TwinSvcError {
    /// The storage backend failed to complete an operation.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
