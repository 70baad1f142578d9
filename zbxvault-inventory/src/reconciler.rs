//! The inventory reconciler.

use crate::error::{InventoryError, InventoryResult};
use crate::table::ReferenceTable;
use tracing::{debug, info, warn};
use zbxvault_api::{Session, ZabbixClient};
use zbxvault_types::EntityId;

/// Tag whose value selects the reference row's group column.
pub const GROUP_TAG: &str = "Group";

/// Tag whose value selects the reference row's customer column.
pub const CUSTOMER_TAG: &str = "Customer";

/// Summary of one inventory reconciliation run.
#[derive(Debug, Clone, Default)]
pub struct InventoryReport {
    /// Hosts whose inventory was pushed.
    pub updated: usize,
    /// Candidate hosts that failed, with the reason.
    pub skipped: Vec<(EntityId, String)>,
}

/// Reconciles host inventory fields against the reference table.
pub struct InventoryReconciler {
    client: ZabbixClient,
    table: ReferenceTable,
}

impl InventoryReconciler {
    /// Creates a reconciler over a loaded reference table.
    pub fn new(client: ZabbixClient, table: ReferenceTable) -> Self {
        Self { client, table }
    }

    /// Reconciles every candidate host.
    ///
    /// Hosts missing either tag are not candidates and are passed over
    /// silently. A candidate whose lookup or update fails is recorded and
    /// the batch continues.
    pub async fn run(&self, session: &Session) -> InventoryResult<InventoryReport> {
        let hosts = self.client.tagged_hosts(session).await?;
        info!(count = hosts.len(), "listed hosts for inventory reconciliation");

        let mut report = InventoryReport::default();
        for host in hosts {
            let (Some(group), Some(customer)) =
                (host.tags.get(GROUP_TAG), host.tags.get(CUSTOMER_TAG))
            else {
                debug!(id = %host.id, "host has no Group/Customer tags, not a candidate");
                continue;
            };

            match self.reconcile_host(&host.id, group, customer, session).await {
                Ok(()) => {
                    info!(id = %host.id, group, customer, "inventory updated");
                    report.updated += 1;
                }
                Err(e) => {
                    warn!(id = %host.id, error = %e, "host skipped, continuing");
                    report.skipped.push((host.id, e.to_string()));
                }
            }
        }

        info!(
            updated = report.updated,
            skipped = report.skipped.len(),
            "inventory run finished"
        );
        Ok(report)
    }

    /// Looks up the host's reference row and pushes the contact fields.
    async fn reconcile_host(
        &self,
        id: &EntityId,
        group: &str,
        customer: &str,
        session: &Session,
    ) -> InventoryResult<()> {
        let contacts = self.table.lookup(group, customer).ok_or_else(|| {
            InventoryError::NoReferenceRow {
                group: group.to_string(),
                customer: customer.to_string(),
            }
        })?;

        let inventory = serde_json::to_value(contacts)?;
        self.client.update_host_inventory(id, inventory, session).await?;
        Ok(())
    }
}
