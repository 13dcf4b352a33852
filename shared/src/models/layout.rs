//! Layout snapshot and draft wire types
//!
//! The persisted layout shape is exactly `{ tables, zones }`. Every field
//! must round-trip losslessly, including `metadata.originalTables` on
//! merged tables — a split after a save/load cycle depends on it.

use super::{FloorTable, Zone};
use serde::{Deserialize, Serialize};

/// Full copy of the layout collections at a point in time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub tables: Vec<FloorTable>,
    pub zones: Vec<Zone>,
}

impl LayoutSnapshot {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.zones.is_empty()
    }
}

/// Persisted draft as echoed by the store on load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    #[serde(flatten)]
    pub layout: LayoutSnapshot,
    pub version: i64,
    pub updated_at: i64,
}

/// Store acknowledgement of a draft save.
///
/// The store is the version authority: it may assign a new version rather
/// than trusting the client's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReceipt {
    pub version: i64,
    pub updated_at: i64,
}
