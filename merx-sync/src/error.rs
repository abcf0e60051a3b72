//! Error types for merx-sync.

use thiserror::Error;

use merx_client::ClientError;

/// All errors that can surface from an orchestration run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Blank or unrecognized selector. Detected before any network activity,
    /// never retried.
    #[error("{0}")]
    InvalidArgument(String),

    /// A source or target client call failed. Transparent so the originating
    /// error surfaces unmodified and callers can match on its kind.
    #[error(transparent)]
    Client(#[from] ClientError),
}
