//! CSV-driven host inventory reconciliation.
//!
//! Hosts tagged with both `Group` and `Customer` are looked up in an
//! external CSV reference table keyed by those tag values; matching rows
//! supply point-of-contact fields that are pushed back into the host's
//! manual inventory through the same API the backup flow uses.
//!
//! A simple batch job: no diffing, no snapshots. Per-host failures are
//! logged and counted, the batch continues.

mod error;
mod reconciler;
mod table;

pub use error::{InventoryError, InventoryResult};
pub use reconciler::{InventoryReconciler, InventoryReport, CUSTOMER_TAG, GROUP_TAG};
pub use table::{PocContacts, ReferenceTable};
