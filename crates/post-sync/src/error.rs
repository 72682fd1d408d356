//! Synchronizer errors.

use thiserror::Error;

use crate::domain::RecordId;

/// Common result type for synchronizer operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Everything that can stop an operation from being applied
///
/// Kept `Clone + PartialEq` so the last failure can live in UI state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// A required field was empty; no request was sent
    #[error("{0}")]
    Validation(String),
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// The response status was not a success
    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },
    /// The response body was not what the source promised
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A confirmed record collides with one already in the collection
    #[error("record {0} already exists")]
    DuplicateId(RecordId),
    #[error("no record is being edited")]
    NoActiveEdit,
    /// A local-id source was asked to confirm a record without an id
    #[error("record has no id")]
    MissingId,
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            SyncError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}
