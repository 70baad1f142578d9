//! Shared type definitions for zbxvault.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//! - `EntityKind` and its static per-kind profile (RPC method names,
//!   snapshot bucket conventions, group filtering rules)
//! - `EntityId`, the opaque identifier the platform hands out
//! - `Outcome` and `SyncReport`, the results of one reconcile and one run
//!
//! Anything that talks to the API or touches disk lives in the other
//! crates, not here.

mod ids;
mod kind;
mod report;

pub use ids::EntityId;
pub use kind::{EntityKind, GroupRule, Grouping, KindProfile};
pub use report::{Outcome, SyncReport};
