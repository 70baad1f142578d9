//! Entity kinds and their static API/snapshot profiles.
//!
//! The backup flow is identical for every kind; only the RPC method names,
//! the keys inside the export document, and the destination-directory
//! conventions differ. That variation is captured here as data so the
//! engine stays a single parameterized loop.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration object kind managed by the monitoring platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Host,
    Map,
    Template,
}

/// Exclusion rule applied to group names during path classification.
///
/// The host and template flows filter groups differently (substring marker
/// vs. exact reserved name). The rule is an explicit per-kind configuration
/// point, not a unified heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRule {
    /// Excludes any group whose name contains the marker.
    Contains(&'static str),
    /// Excludes only the group whose name equals the reserved name.
    Equals(&'static str),
}

impl GroupRule {
    /// Whether a group with this name is excluded from classification.
    pub fn excludes(&self, name: &str) -> bool {
        match self {
            GroupRule::Contains(marker) => name.contains(marker),
            GroupRule::Equals(reserved) => name == *reserved,
        }
    }
}

/// How a kind maps onto the snapshot directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Snapshots land directly in the snapshot root (maps).
    Root,
    /// Snapshots land in a sub-directory named after the last group that
    /// survives the exclusion rule, or in `default_bucket` when none do.
    /// A missing group list is an error for these kinds.
    Grouped {
        default_bucket: &'static str,
        rule: GroupRule,
    },
}

/// Static profile tying one kind to its RPC methods and snapshot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindProfile {
    /// Method that lists all entities of this kind.
    pub list_method: &'static str,
    /// Field carrying the entity ID in list responses.
    pub id_field: &'static str,
    /// Key under `options` in `configuration.export` requests.
    pub export_option: &'static str,
    /// Key of the single-entity record list inside the export document.
    pub record_key: &'static str,
    /// Default directory name for this kind's snapshot root.
    pub snapshot_root: &'static str,
    /// Destination-directory convention.
    pub grouping: Grouping,
}

const HOST_PROFILE: KindProfile = KindProfile {
    list_method: "host.get",
    id_field: "hostid",
    export_option: "hosts",
    record_key: "hosts",
    snapshot_root: "zabbixhost",
    grouping: Grouping::Grouped {
        default_bucket: "Hosts",
        rule: GroupRule::Contains("General"),
    },
};

const MAP_PROFILE: KindProfile = KindProfile {
    list_method: "map.get",
    id_field: "sysmapid",
    export_option: "maps",
    record_key: "maps",
    snapshot_root: "zabbixmap",
    grouping: Grouping::Root,
};

const TEMPLATE_PROFILE: KindProfile = KindProfile {
    list_method: "template.get",
    id_field: "templateid",
    export_option: "templates",
    record_key: "templates",
    snapshot_root: "zabbixtemplate",
    grouping: Grouping::Grouped {
        default_bucket: "Templates",
        rule: GroupRule::Equals("Templates/Customer"),
    },
};

impl EntityKind {
    /// All kinds, in the order a full backup processes them.
    pub const ALL: [EntityKind; 3] = [EntityKind::Host, EntityKind::Map, EntityKind::Template];

    /// The static profile for this kind.
    pub fn profile(&self) -> &'static KindProfile {
        match self {
            EntityKind::Host => &HOST_PROFILE,
            EntityKind::Map => &MAP_PROFILE,
            EntityKind::Template => &TEMPLATE_PROFILE,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Host => "host",
            EntityKind::Map => "map",
            EntityKind::Template => "template",
        };
        f.write_str(name)
    }
}
