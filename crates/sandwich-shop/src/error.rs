//! # HTTP Error Mapping
//!
//! [`ApiError`] is what every handler returns on failure. It renders as a JSON body
//! of the form `{"detail": "<message>"}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use resource_actor::FrameworkError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404, e.g. `"Order not found"`.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// 422: malformed body or path parameter.
    #[error("{0}")]
    Validation(String),

    /// 500. The cause is logged, the client sees a generic message.
    #[error("Internal server error")]
    Internal(#[source] FrameworkError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts a data access failure for resource `name`.
    ///
    /// The actor reports `NotFound` when a row vanished between the handler's
    /// lookup and the mutation, so it still surfaces as a 404.
    pub fn from_framework(name: &'static str, err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(_) => ApiError::NotFound(name),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!(error = %cause, "Request failed");
        }
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
