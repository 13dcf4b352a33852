//! Floor Table Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key under which a merged table keeps the two source tables.
pub const ORIGINAL_TABLES_KEY: &str = "originalTables";

/// Table shape tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Round,
    #[default]
    Square,
    Rect,
}

/// Seating object placed on the floor canvas.
///
/// Position and extents are in abstract layout units. `rotation` (radians)
/// is carried for presentation; collision treats every table as an
/// unrotated box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorTable {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub rotation: f64,
    pub shape: TableShape,
    /// Design seat count, at least 1 in a valid layout
    pub capacity: i32,
    /// Display seat count, defaults to capacity
    pub seats: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    /// Ids of the two tables a merged table replaced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_ids: Option<Vec<String>>,
    /// Opaque bag; for merged tables holds the original table records
    /// under [`ORIGINAL_TABLES_KEY`] so a split can restore them exactly
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl FloorTable {
    /// Display name: label when present, id otherwise.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Whether this table was produced by a merge and can be split.
    pub fn is_merged(&self) -> bool {
        self.metadata.contains_key(ORIGINAL_TABLES_KEY)
    }
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub capacity: i32,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub shape: Option<TableShape>,
    #[serde(default)]
    pub seats: Option<i32>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub zone_id: Option<String>,
}

/// Update table payload (partial merge, absent fields untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
    pub rotation: Option<f64>,
    pub shape: Option<TableShape>,
    pub capacity: Option<i32>,
    pub seats: Option<i32>,
    pub label: Option<String>,
    pub zone_id: Option<String>,
}
