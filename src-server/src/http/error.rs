//! Error-to-response mapping at the HTTP boundary.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::DomainError;

const INTERNAL_MESSAGE: &str = "Internal server error";
const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Everything a handler can fail with
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Body could not be buffered, e.g. over the size limit
    Body(BytesRejection),
    MethodNotAllowed,
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Domain(DomainError::Validation(msg)) | ApiError::Domain(DomainError::NotFound(msg)) => msg,
            ApiError::Domain(DomainError::Internal(detail)) => {
                // Detail stays in the log
                tracing::error!(%detail, "API Error");
                INTERNAL_MESSAGE.to_string()
            }
            ApiError::Body(rejection) => {
                tracing::warn!(status = %status, "request body rejected");
                rejection.body_text()
            }
            ApiError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
