//! Error types for merx-client.

use thiserror::Error;

/// All errors that can arise from commerce-project client calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The platform's gateway rejected the call (HTTP 502). Kept as its own
    /// variant so callers can pattern-match gateway failures.
    #[error("bad gateway: {0}")]
    BadGateway(String),

    /// Any other non-success HTTP status, with the response body for context.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Transport-level failure (connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required environment variable was absent when building the config.
    #[error("missing environment variable {0}")]
    MissingEnv(String),
}
