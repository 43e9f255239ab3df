use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::store::StoreError;

/// Failures surfaced to HTTP clients as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Title is required")]
    MissingTitle,

    #[error("Todo not found")]
    NotFound,

    #[error("Todo not found or already deleted")]
    NotFoundOrDeleted,

    /// Still reported as 404 so clients see a single "missing" outcome.
    #[error("Todo is not deleted")]
    NotDeleted,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload | ApiError::MissingTitle => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::NotFoundOrDeleted | ApiError::NotDeleted => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::NotDeleted => ApiError::NotDeleted,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
