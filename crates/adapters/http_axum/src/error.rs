//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use twinsvc_domain::error::TwinSvcError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TwinSvcError`] and request body rejections to an HTTP response.
pub enum ApiError {
    /// The application layer failed.
    Domain(TwinSvcError),
    /// The request body could not be read as the expected JSON shape.
    Body(JsonRejection),
}

impl From<TwinSvcError> for ApiError {
    fn from(err: TwinSvcError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(TwinSvcError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Body(rejection) => {
                let status = match &rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    other => other.status(),
                };
                tracing::debug!(%status, reason = %rejection.body_text(), "request body rejected");
                (status, rejection.body_text())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
