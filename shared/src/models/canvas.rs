//! Canvas Model

use serde::{Deserialize, Serialize};

/// Bounded editing surface all floor objects must fit inside.
///
/// `grid_size` is the snapping quantum for positions and extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub grid_size: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64, grid_size: f64) -> Self {
        Self {
            width,
            height,
            grid_size,
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1200.0, 800.0, 8.0)
    }
}
