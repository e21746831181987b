//! Shared application state for axum handlers.

use std::sync::Arc;

use twinsvc_app::ports::RecordRepository;
use twinsvc_app::services::record_service::RecordService;

/// Application state shared across all axum handlers of one service.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Record list/create service.
    pub record_service: Arc<RecordService<R>>,
    /// Body returned by `GET /health`.
    pub health_message: &'static str,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            record_service: Arc::clone(&self.record_service),
            health_message: self.health_message,
        }
    }
}

impl<R> AppState<R>
where
    R: RecordRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(record_service: RecordService<R>, health_message: &'static str) -> Self {
        Self::from_arc(Arc::new(record_service), health_message)
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also needed outside the router, e.g.
    /// to seed it before serving.
    pub fn from_arc(record_service: Arc<RecordService<R>>, health_message: &'static str) -> Self {
        Self {
            record_service,
            health_message,
        }
    }
}
