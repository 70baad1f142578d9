use pretty_assertions::assert_eq;
use zbxvault_types::{EntityId, EntityKind, GroupRule, Grouping, Outcome, SyncReport};

// ── EntityKind profiles ──────────────────────────────────────────

#[test]
fn all_kinds_in_processing_order() {
    assert_eq!(
        EntityKind::ALL,
        [EntityKind::Host, EntityKind::Map, EntityKind::Template]
    );
}

#[test]
fn host_profile() {
    let profile = EntityKind::Host.profile();
    assert_eq!(profile.list_method, "host.get");
    assert_eq!(profile.id_field, "hostid");
    assert_eq!(profile.export_option, "hosts");
    assert_eq!(profile.record_key, "hosts");
    assert_eq!(profile.snapshot_root, "zabbixhost");
    assert_eq!(
        profile.grouping,
        Grouping::Grouped {
            default_bucket: "Hosts",
            rule: GroupRule::Contains("General"),
        }
    );
}

#[test]
fn template_profile() {
    let profile = EntityKind::Template.profile();
    assert_eq!(profile.list_method, "template.get");
    assert_eq!(profile.id_field, "templateid");
    assert_eq!(profile.export_option, "templates");
    assert_eq!(profile.record_key, "templates");
    assert_eq!(
        profile.grouping,
        Grouping::Grouped {
            default_bucket: "Templates",
            rule: GroupRule::Equals("Templates/Customer"),
        }
    );
}

#[test]
fn map_profile_has_no_sub_bucket() {
    let profile = EntityKind::Map.profile();
    assert_eq!(profile.list_method, "map.get");
    assert_eq!(profile.id_field, "sysmapid");
    assert_eq!(profile.export_option, "maps");
    assert_eq!(profile.record_key, "maps");
    assert_eq!(profile.grouping, Grouping::Root);
}

#[test]
fn kind_display_names() {
    assert_eq!(EntityKind::Host.to_string(), "host");
    assert_eq!(EntityKind::Map.to_string(), "map");
    assert_eq!(EntityKind::Template.to_string(), "template");
}

#[test]
fn kind_serde_lowercase() {
    assert_eq!(serde_json::to_string(&EntityKind::Host).unwrap(), "\"host\"");
    let kind: EntityKind = serde_json::from_str("\"template\"").unwrap();
    assert_eq!(kind, EntityKind::Template);
}

// ── GroupRule ────────────────────────────────────────────────────

#[test]
fn contains_rule_excludes_substrings() {
    let rule = GroupRule::Contains("General");
    assert!(rule.excludes("General"));
    assert!(rule.excludes("General-X"));
    assert!(rule.excludes("xxGeneralyy"));
    assert!(!rule.excludes("Gen"));
    assert!(!rule.excludes("Customer A"));
}

#[test]
fn equals_rule_excludes_exact_name_only() {
    let rule = GroupRule::Equals("Templates/Customer");
    assert!(rule.excludes("Templates/Customer"));
    assert!(!rule.excludes("Templates/Customer 2"));
    assert!(!rule.excludes("Templates"));
}

// ── EntityId ─────────────────────────────────────────────────────

#[test]
fn entity_id_display_and_access() {
    let id = EntityId::new("10084");
    assert_eq!(id.as_str(), "10084");
    assert_eq!(id.to_string(), "10084");
    assert_eq!(EntityId::from("10084"), id);
}

#[test]
fn entity_id_serde_transparent() {
    let id: EntityId = serde_json::from_str("\"42\"").unwrap();
    assert_eq!(id, EntityId::new("42"));
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
}

// ── SyncReport ───────────────────────────────────────────────────

#[test]
fn report_counts_outcomes() {
    let mut report = SyncReport::default();
    report.record(Outcome::Created);
    report.record(Outcome::Created);
    report.record(Outcome::Updated);
    report.record(Outcome::Unchanged);

    assert_eq!(report.created, 2);
    assert_eq!(report.updated, 1);
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.total(), 4);
    assert!(!report.has_failures());
}

#[test]
fn report_records_failures() {
    let mut report = SyncReport::default();
    report.record(Outcome::Created);
    report.record_failure(EntityId::new("7"), "export failed");

    assert_eq!(report.total(), 2);
    assert!(report.has_failures());
    assert_eq!(report.failed[0].0, EntityId::new("7"));
    assert_eq!(report.failed[0].1, "export failed");
}
