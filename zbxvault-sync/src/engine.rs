//! Sync driver.
//!
//! Orchestrates the per-entity pipeline and isolates failures so one bad
//! entity never blocks backup of the rest. Entities are processed strictly
//! one at a time in listing order; the session and the snapshot tree are
//! shared mutable resources with no locking, so there is no parallelism.

use crate::classify::classify;
use crate::document::display_name;
use crate::error::SyncResult;
use crate::store::SnapshotStore;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use zbxvault_api::{Session, ZabbixClient};
use zbxvault_types::{EntityId, EntityKind, Outcome, SyncReport};

/// Configuration for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Snapshot root directory for the kind being synchronized.
    pub root: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("snapshots"),
        }
    }
}

/// The sync driver: lists, exports, classifies and reconciles one kind.
pub struct SyncEngine {
    client: ZabbixClient,
    store: SnapshotStore,
}

impl SyncEngine {
    /// Creates an engine writing under the configured snapshot root.
    pub fn new(client: ZabbixClient, config: SyncConfig) -> Self {
        let store = SnapshotStore::new(&config.root);
        Self { client, store }
    }

    /// The snapshot store this engine writes through.
    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Synchronizes every entity of the given kind.
    ///
    /// A listing failure aborts the run. Any per-entity failure is recorded
    /// in the report and the batch continues with the next ID.
    pub async fn run(&self, kind: EntityKind, session: &Session) -> SyncResult<SyncReport> {
        let ids = self.client.list_ids(kind, session).await?;
        info!(%kind, count = ids.len(), "listed entities");

        let mut report = SyncReport::default();
        for id in ids {
            match self.sync_one(kind, &id, session).await {
                Ok((outcome, path)) => {
                    match outcome {
                        Outcome::Created => info!(%kind, %id, path = %path.display(), "created snapshot"),
                        Outcome::Updated => info!(%kind, %id, path = %path.display(), "updated snapshot"),
                        Outcome::Unchanged => debug!(%kind, %id, "snapshot unchanged"),
                    }
                    report.record(outcome);
                }
                Err(e) => {
                    warn!(%kind, %id, error = %e, "entity failed, continuing");
                    report.record_failure(id, e.to_string());
                }
            }
        }

        info!(
            %kind,
            created = report.created,
            updated = report.updated,
            unchanged = report.unchanged,
            failed = report.failed.len(),
            "sync run finished"
        );
        Ok(report)
    }

    /// Runs the Export → Classify → BuildPath → Reconcile pipeline for one
    /// entity. Any stage error is the entity's terminal failure reason.
    async fn sync_one(
        &self,
        kind: EntityKind,
        id: &EntityId,
        session: &Session,
    ) -> SyncResult<(Outcome, PathBuf)> {
        let document = self.client.export(kind, id, session).await?;
        let bucket = classify(&document, kind)?;
        let name = display_name(&document, kind)?;
        let path = self.store.snapshot_path(bucket.as_deref(), name);
        let outcome = self.store.reconcile(&path, &document).await?;
        Ok((outcome, path))
    }
}
