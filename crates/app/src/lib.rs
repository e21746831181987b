//! # twinsvc-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** storage adapters implement:
//!   - `RecordRepository` — append-only collection with id assignment
//! - Define the **driving/inbound** use-cases:
//!   - `RecordService` — list, create, seed
//! - Define the seeding policy (`SeedMode`) each service starts with
//!
//! ## Dependency rule
//! Depends on `twinsvc-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod seed;
pub mod services;
