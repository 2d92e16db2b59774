//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use stockroom_domain::error::{StockroomError, ValidationError};

/// JSON error body returned by API endpoints.
///
/// The `detail` key is what API clients read to show a message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Maps failures to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// A use-case failed.
    Domain(StockroomError),
    /// The request could not be decoded (body, query string or path).
    Unprocessable(String),
}

impl From<StockroomError> for ApiError {
    fn from(err: StockroomError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl ApiError {
    /// Status code and client-facing message for this error.
    pub(crate) fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Domain(StockroomError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(StockroomError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(StockroomError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Unprocessable(message) => (StatusCode::UNPROCESSABLE_ENTITY, message.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_message();
        (status, Json(ErrorBody { detail })).into_response()
    }
}
