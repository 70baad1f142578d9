use pretty_assertions::assert_eq;
use serde_json::json;
use zbxvault_sync::document::{display_name, normalize};
use zbxvault_sync::SyncError;
use zbxvault_types::EntityKind;

// ── normalize ────────────────────────────────────────────────────

#[test]
fn normalize_strips_export_date() {
    let doc = json!({
        "zabbix_export": {
            "version": "6.0",
            "date": "2024-03-01T12:00:00Z",
            "hosts": [{"name": "web-01"}],
        }
    });

    let normalized = normalize(&doc);
    assert!(normalized["zabbix_export"].get("date").is_none());
    assert_eq!(normalized["zabbix_export"]["version"], "6.0");
    assert_eq!(normalized["zabbix_export"]["hosts"][0]["name"], "web-01");
}

#[test]
fn normalize_is_identity_without_date() {
    let doc = json!({
        "zabbix_export": {
            "version": "6.0",
            "hosts": [{"name": "web-01"}],
        }
    });
    assert_eq!(normalize(&doc), doc);
}

#[test]
fn normalize_leaves_input_untouched() {
    let doc = json!({
        "zabbix_export": { "date": "2024-03-01T12:00:00Z" }
    });
    let _ = normalize(&doc);
    assert_eq!(doc["zabbix_export"]["date"], "2024-03-01T12:00:00Z");
}

#[test]
fn normalize_ignores_documents_without_export_root() {
    let doc = json!({"something": "else"});
    assert_eq!(normalize(&doc), doc);
}

#[test]
fn documents_differing_only_in_date_normalize_equal() {
    let a = json!({
        "zabbix_export": {
            "date": "2024-03-01T12:00:00Z",
            "hosts": [{"name": "web-01", "status": "0"}],
        }
    });
    let b = json!({
        "zabbix_export": {
            "date": "2025-07-19T08:30:00Z",
            "hosts": [{"name": "web-01", "status": "0"}],
        }
    });
    assert_eq!(normalize(&a), normalize(&b));
}

#[test]
fn documents_differing_beyond_date_stay_different() {
    let a = json!({
        "zabbix_export": { "date": "2024-03-01T12:00:00Z", "hosts": [{"name": "web-01"}] }
    });
    let b = json!({
        "zabbix_export": { "date": "2024-03-01T12:00:00Z", "hosts": [{"name": "web-02"}] }
    });
    assert_ne!(normalize(&a), normalize(&b));
}

// ── display_name ─────────────────────────────────────────────────

#[test]
fn display_name_from_host_record() {
    let doc = json!({
        "zabbix_export": { "hosts": [{"name": "web-01"}] }
    });
    assert_eq!(display_name(&doc, EntityKind::Host).unwrap(), "web-01");
}

#[test]
fn display_name_uses_kind_record_key() {
    let doc = json!({
        "zabbix_export": { "maps": [{"name": "DC overview"}] }
    });
    assert_eq!(display_name(&doc, EntityKind::Map).unwrap(), "DC overview");
    // The same document offers no host record.
    assert!(matches!(
        display_name(&doc, EntityKind::Host),
        Err(SyncError::MissingDisplayName)
    ));
}

#[test]
fn display_name_missing_record_list() {
    let doc = json!({"zabbix_export": {}});
    assert!(matches!(
        display_name(&doc, EntityKind::Template),
        Err(SyncError::MissingDisplayName)
    ));
}

#[test]
fn display_name_empty_record_list() {
    let doc = json!({"zabbix_export": {"hosts": []}});
    assert!(matches!(
        display_name(&doc, EntityKind::Host),
        Err(SyncError::MissingDisplayName)
    ));
}
