//! Reconcile outcomes and run reports.

use crate::EntityId;

/// Result of reconciling one snapshot against disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No file existed; a new snapshot was written.
    Created,
    /// The file existed with different normalized content and was rewritten.
    Updated,
    /// The file existed with equal normalized content; nothing was written.
    Unchanged,
}

/// Summary of one synchronization run over a single entity kind.
///
/// Per-entity failures are folded in here rather than aborting the batch;
/// one malformed entity must never block backup of the rest.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Entities that failed a pipeline stage, with the reason.
    pub failed: Vec<(EntityId, String)>,
}

impl SyncReport {
    /// Folds one successful reconcile outcome into the counts.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
        }
    }

    /// Records a per-entity failure.
    pub fn record_failure(&mut self, id: EntityId, reason: impl Into<String>) {
        self.failed.push((id, reason.into()));
    }

    /// Total number of entities processed, successful or not.
    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged + self.failed.len()
    }

    /// Whether any entity failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
