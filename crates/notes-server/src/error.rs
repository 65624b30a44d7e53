//! Centralized error translation for the HTTP layer.
//!
//! Every handler returns [`ApiResult`]; every failure funnels through
//! [`ApiError::into_response`], the single exit point that picks the
//! status code and JSON body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notes_store::StoreError;

/// Result alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can surface to a client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The path id is not a syntactically valid identifier.
    #[error("malformatted id")]
    MalformattedId,

    /// No matching document. Not an error from the client's perspective;
    /// rendered as 404 with an empty body.
    #[error("not found")]
    NotFound,

    /// Client input rejected by store-layer validation. The message is
    /// part of the client contract.
    #[error("{0}")]
    Validation(String),

    /// Unclassified store failure. Logged, rendered as a generic 500.
    #[error(transparent)]
    Store(#[from] sqlx::Error),

    /// Internal failure outside the store (e.g. password hashing).
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => ApiError::MalformattedId,
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Validation(msg) => ApiError::Validation(msg),
            StoreError::Database(e) => ApiError::Store(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformattedId => error_body(StatusCode::BAD_REQUEST, "malformatted id"),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(msg) => error_body(StatusCode::BAD_REQUEST, &msg),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal failure");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
