//! Axum router assembly.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use twinsvc_app::ports::RecordRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`] for one service.
///
/// Serves `/health` plus the record collection routes. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem. Any other path falls through to
/// axum's default `404`; a wrong method on a known path gets `405`.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: RecordRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check::<R>))
        .merge(crate::api::routes::<R>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check<R>(State(state): State<AppState<R>>) -> &'static str
where
    R: RecordRepository + Send + Sync + 'static,
{
    state.health_message
}
