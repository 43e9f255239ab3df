//! Errors returned by `TodoClient` parse methods.
//!
//! 404 and 400 carry the server's `{"error": ...}` message. The server
//! reports both "unknown id" and "restore of an active todo" as 404, so
//! `NotFound` covers both and the message tells them apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The server returned 400.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
