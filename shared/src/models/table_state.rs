//! Table State Model
//!
//! Operational occupancy status, decoupled from layout geometry. A table
//! can change status without the layout version moving.

use serde::{Deserialize, Serialize};

/// Occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Free,
    Seated,
    Dirty,
    Reserved,
}

/// Status record keyed by table id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub id: String,
    pub status: TableStatus,
    pub updated_at: i64,
}

impl TableState {
    pub fn new(id: impl Into<String>, status: TableStatus) -> Self {
        Self {
            id: id.into(),
            status,
            updated_at: crate::util::now_millis(),
        }
    }
}
