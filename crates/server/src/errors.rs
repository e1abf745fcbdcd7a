use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::PersonResponse;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::warn;

/// Failed submission. Always rendered as `400` with the failure envelope.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ServiceError::from(rejection))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        warn!(event = "person_rejected", kind = err.kind(), error = %err, "error saving person");
        (StatusCode::BAD_REQUEST, Json(PersonResponse::failed(&err))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
