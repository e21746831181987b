//! # twinsvc-domain
//!
//! Pure domain model shared by the two twinsvc services.
//!
//! ## Responsibilities
//! - Foundational types: the sequential [`RecordId`](id::RecordId) and the
//!   workspace error type
//! - The [`Record`](record::Record) trait every stored entity implements
//! - **Products** (service `m1`) and **Orders** (service `m2`)
//! - The fixed seed records each service starts with
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;

pub mod order;
pub mod product;
