//! # twinsvc-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `GET /health` with the service's fixed status text
//! - Serve `GET /{collection}` (list) and `POST /{collection}` (create) as JSON,
//!   where `{collection}` comes from the record type (`products`, `orders`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and body rejections into HTTP responses
//!
//! ## Dependency rule
//! Depends on `twinsvc-app` (for port traits and services) and `twinsvc-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
