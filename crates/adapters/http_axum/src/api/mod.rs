//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod records;

use axum::Router;
use axum::routing::get;

use twinsvc_app::ports::RecordRepository;
use twinsvc_domain::record::Record;

use crate::state::AppState;

/// Build the collection sub-router, mounted at `/{collection}`.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: RecordRepository + Send + Sync + 'static,
{
    let path = format!("/{}", <R::Record as Record>::COLLECTION);
    Router::new().route(&path, get(records::list::<R>).post(records::create::<R>))
}
