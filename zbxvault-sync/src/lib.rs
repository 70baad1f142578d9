//! Snapshot synchronization engine.
//!
//! Pulls configuration exports from the platform and persists them as
//! pretty-printed JSON snapshots on disk, rewriting a file only when its
//! normalized content actually changed.
//!
//! # Pipeline
//!
//! For every entity ID the lister returns:
//!
//! 1. **Export**: fetch the entity's configuration document
//! 2. **Classify**: derive the destination directory from its group list
//! 3. **Normalize**: strip the volatile export date before any comparison
//! 4. **Reconcile**: create, update or skip the on-disk snapshot
//!
//! A failure in any stage is recorded against that entity and the batch
//! moves on; only authentication and listing failures abort a run.

pub mod classify;
pub mod document;
mod engine;
mod error;
pub mod store;

pub use engine::{SyncConfig, SyncEngine};
pub use error::{SyncError, SyncResult};
pub use store::SnapshotStore;
