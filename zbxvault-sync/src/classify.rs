//! Path classification.
//!
//! Maps an export document to the sub-directory its snapshot belongs in,
//! based on the group records embedded in the document and the kind's
//! grouping convention.

use crate::document::EXPORT_ROOT_KEY;
use crate::error::{SyncError, SyncResult};
use serde_json::Value;
use zbxvault_types::{EntityKind, Grouping};

/// Key of the group record list inside the export root.
const GROUPS_KEY: &str = "groups";

/// Derives the destination directory for a document of the given kind.
///
/// Returns `None` for kinds whose snapshots live directly in the snapshot
/// root (maps). For grouped kinds, scans the document's group list and
/// selects the **last** group whose name survives the kind's exclusion
/// rule; if none survives, or the list is empty, falls back to the kind's
/// default bucket. A missing group list is [`SyncError::MissingGroups`].
///
/// Last-wins is deliberate: callers must not assume first-match or
/// most-specific semantics.
pub fn classify(document: &Value, kind: EntityKind) -> SyncResult<Option<String>> {
    let Grouping::Grouped { default_bucket, rule } = kind.profile().grouping else {
        return Ok(None);
    };

    let groups = document
        .get(EXPORT_ROOT_KEY)
        .and_then(|root| root.get(GROUPS_KEY))
        .and_then(Value::as_array)
        .ok_or(SyncError::MissingGroups)?;

    let mut selected = default_bucket.to_string();
    for group in groups {
        let Some(name) = group.get("name").and_then(Value::as_str) else {
            continue;
        };
        if !rule.excludes(name) {
            selected = name.to_string();
        }
    }

    Ok(Some(selected))
}
