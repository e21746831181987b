//! JSON REST handlers for a record collection.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use twinsvc_app::ports::RecordRepository;
use twinsvc_domain::record::Record;

use crate::error::ApiError;
use crate::state::AppState;

type Draft<R> = <<R as RecordRepository>::Record as Record>::Draft;

/// Possible responses from the list endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse<T> {
    /// `201 Created` with the stored record and its `Location`.
    Created(T),
}

impl<T: Record> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(record) => {
                let location = format!("/{}/{}", T::COLLECTION, record.id());
                (
                    StatusCode::CREATED,
                    [(header::LOCATION, location)],
                    Json(record),
                )
                    .into_response()
            }
        }
    }
}

/// `GET /{collection}`
pub async fn list<R>(
    State(state): State<AppState<R>>,
) -> Result<ListResponse<R::Record>, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
{
    let records = state.record_service.list_records().await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `POST /{collection}`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<Draft<R>>, JsonRejection>,
) -> Result<CreateResponse<R::Record>, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
{
    let Json(draft) = body?;
    let created = state.record_service.create_record(draft).await?;
    Ok(CreateResponse::Created(created))
}
