//! Error types for the synchronization engine.

use std::path::PathBuf;
use thiserror::Error;
use zbxvault_api::ApiError;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while synchronizing snapshots.
#[derive(Debug, Error)]
pub enum SyncError {
    /// API failure (transport, HTTP, RPC error object, malformed export).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The export document has no usable group list for a kind that
    /// requires one.
    #[error("export document has no group list")]
    MissingGroups,

    /// The export document has no entity record with a display name.
    #[error("export document has no display name")]
    MissingDisplayName,

    /// An existing snapshot file could not be read or parsed. Surfaced
    /// instead of overwriting: prior content that cannot be verified is
    /// never clobbered.
    #[error("unreadable snapshot {path}: {reason}")]
    SnapshotRead { path: PathBuf, reason: String },

    /// Filesystem failure while writing a snapshot or its directory.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Snapshot serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
