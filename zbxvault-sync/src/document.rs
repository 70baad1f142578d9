//! Export document access and normalization.
//!
//! Export documents are untyped [`serde_json::Value`] trees under a single
//! well-known root key. Change detection is whole-document structural
//! equality, so the only transformation needed before comparing is removal
//! of the volatile export date.

use crate::error::{SyncError, SyncResult};
use serde_json::Value;
use zbxvault_types::EntityKind;

/// Root key every export document carries.
pub const EXPORT_ROOT_KEY: &str = "zabbix_export";

/// Volatile timestamp key inside the export root, excluded from comparison.
pub const EXPORT_DATE_KEY: &str = "date";

/// Returns a copy of the document with the volatile export date removed.
///
/// Identity for documents without the key. Applied symmetrically to fresh
/// exports and to documents loaded from disk, so two documents differing
/// only in export date compare equal.
pub fn normalize(document: &Value) -> Value {
    let mut normalized = document.clone();
    if let Some(root) = normalized.get_mut(EXPORT_ROOT_KEY).and_then(Value::as_object_mut) {
        root.remove(EXPORT_DATE_KEY);
    }
    normalized
}

/// Extracts the human-readable display name used as the snapshot filename.
///
/// The export scopes exactly one entity, so the name comes from the first
/// record under the kind's record key.
pub fn display_name(document: &Value, kind: EntityKind) -> SyncResult<&str> {
    document
        .get(EXPORT_ROOT_KEY)
        .and_then(|root| root.get(kind.profile().record_key))
        .and_then(Value::as_array)
        .and_then(|records| records.first())
        .and_then(|record| record.get("name"))
        .and_then(Value::as_str)
        .ok_or(SyncError::MissingDisplayName)
}
