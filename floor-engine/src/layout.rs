//! Layout Model
//!
//! Owns the `tables`/`zones` collections and id generation. Mutations here
//! are plain collection edits; versioning, history, and logging live in the
//! [`crate::editor::FloorEditor`] wrapper.
//!
//! Insertion never blocks on invariants: an operator may pass through
//! invalid intermediate states (overlaps, bad capacity) which surface at
//! validation time instead.

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::geometry::{self, Aabb};
use shared::models::{
    DEFAULT_ZONE_COLOR, FloorTable, LayoutSnapshot, TableCreate, TableUpdate, Zone, ZoneCreate,
    ZoneUpdate,
};

/// Cardinal direction for one-grid-step nudges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The floor entity graph
#[derive(Debug, Clone, Default)]
pub struct LayoutModel {
    tables: Vec<FloorTable>,
    zones: Vec<Zone>,
}

impl LayoutModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Lookup ====================

    pub fn tables(&self) -> &[FloorTable] {
        &self.tables
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn table(&self, id: &str) -> Option<&FloorTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    fn table_mut(&mut self, id: &str) -> Option<&mut FloorTable> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    /// AABB view of a table, rotation ignored
    pub fn table_aabb(&self, id: &str) -> Option<Aabb> {
        self.table(id).map(|t| Aabb::new(t.x, t.y, t.w, t.h))
    }

    // ==================== Id generation ====================

    /// Next sequential table id `T<n>`, n = 1 + max existing numeric suffix.
    ///
    /// Deleted ids are never reissued as long as a higher-numbered table
    /// remains; after deleting the maximum the counter may move back, which
    /// still never collides with a live id.
    pub fn next_table_id(&self) -> String {
        let max = Self::max_suffix(self.tables.iter().map(|t| t.id.as_str()), 'T');
        format!("T{}", max + 1)
    }

    /// Next sequential zone id `Z<n>`
    pub fn next_zone_id(&self) -> String {
        let max = Self::max_suffix(self.zones.iter().map(|z| z.id.as_str()), 'Z');
        format!("Z{}", max + 1)
    }

    fn max_suffix<'a>(ids: impl Iterator<Item = &'a str>, prefix: char) -> u64 {
        ids.filter_map(|id| id.strip_prefix(prefix))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
    }

    // ==================== Table mutations ====================

    /// Insert a new table and return it. Always succeeds; invalid geometry
    /// or capacity is surfaced by validation, not rejected here.
    pub fn add_table(&mut self, spec: TableCreate) -> &FloorTable {
        let id = self.next_table_id();
        let table = FloorTable {
            id,
            x: spec.x,
            y: spec.y,
            w: spec.w,
            h: spec.h,
            rotation: spec.rotation.unwrap_or(0.0),
            shape: spec.shape.unwrap_or_default(),
            capacity: spec.capacity,
            seats: spec.seats.unwrap_or(spec.capacity),
            label: spec.label,
            zone_id: spec.zone_id,
            child_ids: None,
            metadata: serde_json::Map::new(),
        };
        self.tables.push(table);
        self.tables.last().expect("table just pushed")
    }

    /// Re-insert a previously captured table record verbatim (split restore).
    pub fn insert_table(&mut self, table: FloorTable) {
        self.tables.push(table);
    }

    /// Merge non-empty fields of `update` into the table.
    pub fn update_table(&mut self, id: &str, update: TableUpdate) -> EditorResult<()> {
        let table = self
            .table_mut(id)
            .ok_or_else(|| EditorError::TableNotFound(id.to_string()))?;
        if let Some(x) = update.x {
            table.x = x;
        }
        if let Some(y) = update.y {
            table.y = y;
        }
        if let Some(w) = update.w {
            table.w = w;
        }
        if let Some(h) = update.h {
            table.h = h;
        }
        if let Some(rotation) = update.rotation {
            table.rotation = rotation;
        }
        if let Some(shape) = update.shape {
            table.shape = shape;
        }
        if let Some(capacity) = update.capacity {
            table.capacity = capacity;
        }
        if let Some(seats) = update.seats {
            table.seats = seats;
        }
        if let Some(label) = update.label {
            table.label = Some(label);
        }
        if let Some(zone_id) = update.zone_id {
            table.zone_id = Some(zone_id);
        }
        Ok(())
    }

    pub fn delete_table(&mut self, id: &str) -> EditorResult<FloorTable> {
        let idx = self
            .tables
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| EditorError::TableNotFound(id.to_string()))?;
        Ok(self.tables.remove(idx))
    }

    /// Move a table. Snaps first when enabled, then rejects silently
    /// (returns `false`, no mutation) if the box would leave the canvas.
    /// Overlap with other tables is allowed at move time.
    pub fn move_table(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        config: &EditorConfig,
    ) -> EditorResult<bool> {
        let (w, h) = {
            let table = self
                .table(id)
                .ok_or_else(|| EditorError::TableNotFound(id.to_string()))?;
            (table.w, table.h)
        };
        let (x, y) = if config.snap_to_grid {
            geometry::snap(x, y, config.canvas.grid_size)
        } else {
            (x, y)
        };
        if !geometry::contains(&config.canvas, &Aabb::new(x, y, w, h)) {
            return Ok(false);
        }
        let table = self.table_mut(id).expect("checked above");
        table.x = x;
        table.y = y;
        Ok(true)
    }

    /// Resize a table. Extents snap to grid when enabled and clamp to the
    /// configured minimum; an out-of-canvas result is a silent no-op.
    pub fn resize_table(
        &mut self,
        id: &str,
        w: f64,
        h: f64,
        config: &EditorConfig,
    ) -> EditorResult<bool> {
        let (x, y) = {
            let table = self
                .table(id)
                .ok_or_else(|| EditorError::TableNotFound(id.to_string()))?;
            (table.x, table.y)
        };
        let (w, h) = if config.snap_to_grid {
            geometry::snap(w, h, config.canvas.grid_size)
        } else {
            (w, h)
        };
        let min = config.min_table_size();
        let (w, h) = (w.max(min), h.max(min));
        if !geometry::contains(&config.canvas, &Aabb::new(x, y, w, h)) {
            return Ok(false);
        }
        let table = self.table_mut(id).expect("checked above");
        table.w = w;
        table.h = h;
        Ok(true)
    }

    /// Move by exactly one grid unit in a cardinal direction.
    pub fn nudge_table(
        &mut self,
        id: &str,
        direction: Direction,
        config: &EditorConfig,
    ) -> EditorResult<bool> {
        let step = config.canvas.grid_size;
        let (x, y) = {
            let table = self
                .table(id)
                .ok_or_else(|| EditorError::TableNotFound(id.to_string()))?;
            (table.x, table.y)
        };
        let (x, y) = match direction {
            Direction::Up => (x, y - step),
            Direction::Down => (x, y + step),
            Direction::Left => (x - step, y),
            Direction::Right => (x + step, y),
        };
        self.move_table(id, x, y, config)
    }

    pub fn assign_table_to_zone(
        &mut self,
        table_id: &str,
        zone_id: Option<String>,
    ) -> EditorResult<()> {
        if let Some(zone_id) = &zone_id
            && self.zone(zone_id).is_none()
        {
            return Err(EditorError::ZoneNotFound(zone_id.clone()));
        }
        let table = self
            .table_mut(table_id)
            .ok_or_else(|| EditorError::TableNotFound(table_id.to_string()))?;
        table.zone_id = zone_id;
        Ok(())
    }

    // ==================== Zone mutations ====================

    pub fn add_zone(&mut self, spec: ZoneCreate) -> &Zone {
        let id = self.next_zone_id();
        let zone = Zone {
            id,
            name: spec.name,
            color: spec.color.unwrap_or_else(|| DEFAULT_ZONE_COLOR.to_string()),
            visible: true,
        };
        self.zones.push(zone);
        self.zones.last().expect("zone just pushed")
    }

    pub fn update_zone(&mut self, id: &str, update: ZoneUpdate) -> EditorResult<()> {
        let zone = self
            .zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| EditorError::ZoneNotFound(id.to_string()))?;
        if let Some(name) = update.name {
            zone.name = name;
        }
        if let Some(color) = update.color {
            zone.color = color;
        }
        if let Some(visible) = update.visible {
            zone.visible = visible;
        }
        Ok(())
    }

    /// Remove a zone and clear `zone_id` on every table that referenced it.
    /// Tables themselves are never cascade-deleted.
    pub fn delete_zone(&mut self, id: &str) -> EditorResult<Zone> {
        let idx = self
            .zones
            .iter()
            .position(|z| z.id == id)
            .ok_or_else(|| EditorError::ZoneNotFound(id.to_string()))?;
        let zone = self.zones.remove(idx);
        for table in &mut self.tables {
            if table.zone_id.as_deref() == Some(id) {
                table.zone_id = None;
            }
        }
        Ok(zone)
    }

    pub fn toggle_zone_visibility(&mut self, id: &str) -> EditorResult<bool> {
        let zone = self
            .zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| EditorError::ZoneNotFound(id.to_string()))?;
        zone.visible = !zone.visible;
        Ok(zone.visible)
    }

    // ==================== Snapshots ====================

    /// Deep copy of the current collections. History entries hold these
    /// copies so later in-place edits cannot reach back into them.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            tables: self.tables.clone(),
            zones: self.zones.clone(),
        }
    }

    /// Replace the whole model with a snapshot's contents.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) {
        self.tables = snapshot.tables.clone();
        self.zones = snapshot.zones.clone();
    }
}
