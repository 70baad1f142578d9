//! On-disk snapshot store.
//!
//! Exclusively owns filesystem state under the snapshot root: no other
//! component touches disk. Decides create vs. update vs. no-op by comparing
//! normalized documents, and never deletes — entities removed from the
//! platform leave their last snapshot behind.

use crate::document::normalize;
use crate::error::{SyncError, SyncResult};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use zbxvault_types::Outcome;

/// Persists snapshots under a single root directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Creates a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The snapshot root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Builds the snapshot path for a classified bucket and display name.
    ///
    /// `bucket` of `None` places the file directly in the root. Recomputing
    /// this for the same inputs always yields the same path.
    pub fn snapshot_path(&self, bucket: Option<&str>, display_name: &str) -> PathBuf {
        let dir = match bucket {
            Some(bucket) => self.root.join(bucket),
            None => self.root.clone(),
        };
        dir.join(format!("{display_name}.json"))
    }

    /// Reconciles a freshly exported document against the file at `path`.
    ///
    /// - no file: writes the document, returns [`Outcome::Created`]
    /// - file with equal normalized content: no write, mtime preserved,
    ///   returns [`Outcome::Unchanged`]
    /// - file with different normalized content: overwrites with the
    ///   **un-normalized** document (the on-disk file keeps its own export
    ///   date), returns [`Outcome::Updated`]
    ///
    /// An existing file that cannot be read or parsed is
    /// [`SyncError::SnapshotRead`]; the file is left byte-for-byte intact.
    pub async fn reconcile(&self, path: &Path, new_document: &Value) -> SyncResult<Outcome> {
        match fs::read(path).await {
            Ok(bytes) => {
                let existing: Value = serde_json::from_slice(&bytes).map_err(|e| {
                    SyncError::SnapshotRead {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    }
                })?;

                if normalize(&existing) == normalize(new_document) {
                    Ok(Outcome::Unchanged)
                } else {
                    self.write(path, new_document).await?;
                    Ok(Outcome::Updated)
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write(path, new_document).await?;
                Ok(Outcome::Created)
            }
            Err(e) => Err(SyncError::SnapshotRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    /// Writes a document as pretty-printed JSON, creating parent
    /// directories as needed (no error if already present).
    async fn write(&self, path: &Path, document: &Value) -> SyncResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| SyncError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let pretty = serde_json::to_vec_pretty(document)?;
        fs::write(path, pretty).await.map_err(|e| SyncError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
