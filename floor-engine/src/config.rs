//! Editor Configuration

use shared::models::Canvas;

/// Engine configuration for one floor-editing session
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub canvas: Canvas,
    /// Snap positions and extents to the canvas grid
    pub snap_to_grid: bool,
    /// Maximum retained undo history entries
    pub max_history: usize,
    /// Merge adjacency threshold, expressed in grid units
    pub adjacency_grid_units: f64,
}

impl EditorConfig {
    pub fn from_env() -> Self {
        let defaults = Canvas::default();
        Self {
            canvas: Canvas {
                width: std::env::var("FLOOR_CANVAS_WIDTH")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.width),
                height: std::env::var("FLOOR_CANVAS_HEIGHT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.height),
                grid_size: std::env::var("FLOOR_GRID_SIZE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.grid_size),
            },
            snap_to_grid: std::env::var("FLOOR_SNAP_TO_GRID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            max_history: std::env::var("FLOOR_MAX_HISTORY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            adjacency_grid_units: 2.0,
        }
    }

    /// Create a config with a custom canvas
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Adjacency threshold for merging, in layout units
    pub fn merge_threshold(&self) -> f64 {
        self.adjacency_grid_units * self.canvas.grid_size
    }

    /// Minimum table extent after a resize
    pub fn min_table_size(&self) -> f64 {
        6.0 * self.canvas.grid_size
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            snap_to_grid: true,
            max_history: 20,
            adjacency_grid_units: 2.0,
        }
    }
}
