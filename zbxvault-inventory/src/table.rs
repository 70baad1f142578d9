//! The CSV reference table.
//!
//! Headerless rows of `group, customer, poc-1 fields…, poc-2 fields`,
//! keyed by the `(group, customer)` pair.

use crate::error::InventoryResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Point-of-contact fields pushed into a host's manual inventory.
///
/// Field names match the platform's inventory property names so the struct
/// serializes directly into the `inventory` parameter of the update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocContacts {
    pub poc_1_name: String,
    pub poc_1_email: String,
    pub poc_1_cell: String,
    pub poc_1_screen: String,
    pub poc_1_notes: String,
    pub poc_2_name: String,
    pub poc_2_screen: String,
}

/// One positional row of the reference CSV.
#[derive(Debug, Deserialize)]
struct ReferenceRow {
    group: String,
    customer: String,
    poc_1_name: String,
    poc_1_email: String,
    poc_1_cell: String,
    poc_1_screen: String,
    poc_1_notes: String,
    poc_2_name: String,
    poc_2_screen: String,
}

/// In-memory reference table, loaded once per run.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    rows: HashMap<(String, String), PocContacts>,
}

impl ReferenceTable {
    /// Loads a headerless CSV file. A later row with the same
    /// `(group, customer)` key replaces an earlier one.
    pub fn load(path: &Path) -> InventoryResult<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path)?;

        let mut rows = HashMap::new();
        for record in reader.deserialize::<ReferenceRow>() {
            let row = record?;
            rows.insert(
                (row.group, row.customer),
                PocContacts {
                    poc_1_name: row.poc_1_name,
                    poc_1_email: row.poc_1_email,
                    poc_1_cell: row.poc_1_cell,
                    poc_1_screen: row.poc_1_screen,
                    poc_1_notes: row.poc_1_notes,
                    poc_2_name: row.poc_2_name,
                    poc_2_screen: row.poc_2_screen,
                },
            );
        }

        Ok(Self { rows })
    }

    /// Looks up the contacts for a `(group, customer)` pair.
    pub fn lookup(&self, group: &str, customer: &str) -> Option<&PocContacts> {
        self.rows.get(&(group.to_string(), customer.to_string()))
    }

    /// Number of distinct `(group, customer)` keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
