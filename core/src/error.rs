//! Error types for the todo API client.
//!
//! # Design
//! The UI treats every variant as the same "request failed" condition and
//! only shows the `Display` text. The variants exist so logs say which step
//! broke.

use thiserror::Error;

/// Errors produced while building, executing or parsing a todo API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
