//! Zone Model

use serde::{Deserialize, Serialize};

/// Default presentation color for new zones
pub const DEFAULT_ZONE_COLOR: &str = "#9e9e9e";

/// Zone entity: a named, colored grouping of tables, orthogonal to geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    /// Presentation only, never validated
    pub color: String,
    pub visible: bool,
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCreate {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Update zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub visible: Option<bool>,
}
