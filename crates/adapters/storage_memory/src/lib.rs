//! # twinsvc-adapter-storage-memory
//!
//! Non-persistent storage adapter. Every record lives in process memory and
//! is lost when the process exits.
//!
//! ## Responsibilities
//! - Implement the `RecordRepository` port defined in `twinsvc-app::ports::storage`
//! - Assign sequential identifiers under the same lock that appends the record
//!
//! ## Dependency rule
//! Depends on `twinsvc-app` (for port traits) and `twinsvc-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod record_repo;

pub use error::StorageError;
pub use record_repo::InMemoryRepository;
