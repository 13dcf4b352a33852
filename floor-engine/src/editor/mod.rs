//! FloorEditor - command facade for one floor-editing session
//!
//! This module ties the engine together:
//! - applies layout mutations and snapshots each one into history
//! - maintains `layout_version`, draft dirtiness, and the publish phase
//! - runs validation on demand and caches the result for UI reads
//! - drives the draft store through save/load/activate
//!
//! # Command Flow
//!
//! ```text
//! command(args)
//!     ├─ 1. Resolve ids (NotFound on a missing table/zone)
//!     ├─ 2. Apply mutation to the LayoutModel
//!     ├─ 3. Push snapshot into LayoutHistory
//!     ├─ 4. Bump layout_version, mark draft dirty
//!     └─ 5. Return result
//! ```
//!
//! Every in-memory command is synchronous; only `save_draft`, `load_draft`
//! and `activate` suspend on the store. The editor holds no locks — hosts
//! exposing one editor to several callers must serialize access.

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::history::LayoutHistory;
use crate::layout::LayoutModel;
use crate::merge;
use crate::store::DraftStore;
use crate::validation::{LayoutViolation, validate_layout};
use serde::{Deserialize, Serialize};
use shared::models::{
    DraftReceipt, TableCreate, TableState, TableStatus, TableUpdate, ZoneCreate, ZoneUpdate,
};
use shared::util::now_millis;
use std::collections::HashMap;
use std::sync::Arc;

pub use crate::layout::Direction;

#[cfg(test)]
mod tests;

/// Draft lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublishPhase {
    NoDraft,
    DirtyDraft,
    SavedDraft,
    Activating,
    Active,
}

/// Single-session floor layout editor.
///
/// The `epoch` field is a unique identifier generated per editor instance.
/// Hosts use it to detect engine restarts and drop any cached state.
pub struct FloorEditor {
    floor_id: String,
    config: EditorConfig,
    layout: LayoutModel,
    history: LayoutHistory,
    statuses: HashMap<String, TableState>,
    selected: Option<String>,
    validation_errors: Vec<LayoutViolation>,
    layout_version: i64,
    has_draft: bool,
    draft_saved_at: Option<i64>,
    last_activated_at: Option<i64>,
    phase: PublishPhase,
    store: Arc<dyn DraftStore>,
    epoch: String,
}

impl std::fmt::Debug for FloorEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloorEditor")
            .field("floor_id", &self.floor_id)
            .field("layout_version", &self.layout_version)
            .field("phase", &self.phase)
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl FloorEditor {
    /// Create an editor for `floor_id` over an empty layout.
    pub fn new(
        floor_id: impl Into<String>,
        config: EditorConfig,
        store: Arc<dyn DraftStore>,
    ) -> Self {
        let floor_id = floor_id.into();
        let layout = LayoutModel::new();
        let history = LayoutHistory::new(layout.snapshot(), config.max_history);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(floor_id = %floor_id, epoch = %epoch, "Floor editor started");
        Self {
            floor_id,
            config,
            layout,
            history,
            statuses: HashMap::new(),
            selected: None,
            validation_errors: Vec::new(),
            layout_version: 0,
            has_draft: false,
            draft_saved_at: None,
            last_activated_at: None,
            phase: PublishPhase::NoDraft,
            store,
            epoch,
        }
    }

    /// Record a successful mutation: history snapshot, version bump, dirty.
    fn touch(&mut self, action: &str) {
        self.history.push(self.layout.snapshot(), action);
        self.layout_version += 1;
        self.has_draft = true;
        self.phase = PublishPhase::DirtyDraft;
        tracing::debug!(
            floor_id = %self.floor_id,
            action = %action,
            version = self.layout_version,
            "Layout mutated"
        );
    }

    // ==================== Table commands ====================

    /// Insert a table and return its generated id. Insertion is always
    /// permitted; invalid states surface at validation so the operator can
    /// fix them interactively.
    pub fn add_table(&mut self, spec: TableCreate) -> String {
        let id = self.layout.add_table(spec).id.clone();
        self.touch("add_table");
        id
    }

    pub fn update_table(&mut self, id: &str, update: TableUpdate) -> EditorResult<()> {
        self.layout.update_table(id, update)?;
        self.touch("update_table");
        Ok(())
    }

    pub fn delete_table(&mut self, id: &str) -> EditorResult<()> {
        self.layout.delete_table(id)?;
        self.statuses.remove(id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.touch("delete_table");
        Ok(())
    }

    /// Move a table. Returns `false` (and mutates nothing) when the target
    /// position would leave the canvas — a routine interactive event, not
    /// an error. Overlap is allowed here and caught by validation.
    pub fn move_table(&mut self, id: &str, x: f64, y: f64) -> EditorResult<bool> {
        let moved = self.layout.move_table(id, x, y, &self.config)?;
        if moved {
            self.touch("move_table");
        }
        Ok(moved)
    }

    pub fn resize_table(&mut self, id: &str, w: f64, h: f64) -> EditorResult<bool> {
        let resized = self.layout.resize_table(id, w, h, &self.config)?;
        if resized {
            self.touch("resize_table");
        }
        Ok(resized)
    }

    /// Move by one grid unit in a cardinal direction.
    pub fn nudge_table(&mut self, id: &str, direction: Direction) -> EditorResult<bool> {
        let moved = self.layout.nudge_table(id, direction, &self.config)?;
        if moved {
            self.touch("nudge_table");
        }
        Ok(moved)
    }

    pub fn assign_table_to_zone(
        &mut self,
        table_id: &str,
        zone_id: Option<String>,
    ) -> EditorResult<()> {
        self.layout.assign_table_to_zone(table_id, zone_id)?;
        self.touch("assign_table_to_zone");
        Ok(())
    }

    /// Select a table for subsequent UI operations. Selection is host
    /// affordance state, not a layout edit: no version bump, no history.
    pub fn select_table(&mut self, id: Option<&str>) -> EditorResult<()> {
        if let Some(id) = id {
            if self.layout.table(id).is_none() {
                return Err(EditorError::TableNotFound(id.to_string()));
            }
            self.selected = Some(id.to_string());
        } else {
            self.selected = None;
        }
        Ok(())
    }

    // ==================== Zone commands ====================

    pub fn add_zone(&mut self, spec: ZoneCreate) -> String {
        let id = self.layout.add_zone(spec).id.clone();
        self.touch("add_zone");
        id
    }

    pub fn update_zone(&mut self, id: &str, update: ZoneUpdate) -> EditorResult<()> {
        self.layout.update_zone(id, update)?;
        self.touch("update_zone");
        Ok(())
    }

    /// Delete a zone; referencing tables drop their `zone_id` but survive.
    pub fn delete_zone(&mut self, id: &str) -> EditorResult<()> {
        self.layout.delete_zone(id)?;
        self.touch("delete_zone");
        Ok(())
    }

    pub fn toggle_zone_visibility(&mut self, id: &str) -> EditorResult<bool> {
        let visible = self.layout.toggle_zone_visibility(id)?;
        self.touch("toggle_zone_visibility");
        Ok(visible)
    }

    // ==================== Status commands ====================

    /// Update the operational status map. Status is decoupled from layout
    /// geometry: this never bumps `layout_version` or touches history.
    pub fn update_table_status(&mut self, id: &str, status: TableStatus) -> EditorResult<()> {
        if self.layout.table(id).is_none() {
            return Err(EditorError::TableNotFound(id.to_string()));
        }
        self.statuses
            .insert(id.to_string(), TableState::new(id, status));
        tracing::debug!(floor_id = %self.floor_id, table_id = %id, status = ?status, "Table status updated");
        Ok(())
    }

    pub fn table_status(&self, id: &str) -> Option<&TableState> {
        self.statuses.get(id)
    }

    pub fn table_states(&self) -> &HashMap<String, TableState> {
        &self.statuses
    }

    // ==================== Merge / split ====================

    /// Adjacency is the only precondition; zone and shape need not match.
    pub fn can_merge(&self, id1: &str, id2: &str) -> bool {
        merge::can_merge(&self.layout, id1, id2, self.config.merge_threshold())
    }

    /// Merge two adjacent tables into one; `None` when they cannot merge.
    /// A reversible composite edit: one history entry.
    pub fn merge_tables(&mut self, id1: &str, id2: &str) -> Option<String> {
        let merged_id =
            merge::merge_tables(&mut self.layout, id1, id2, self.config.merge_threshold())?;
        for source in [id1, id2] {
            self.statuses.remove(source);
            if self.selected.as_deref() == Some(source) {
                self.selected = None;
            }
        }
        self.touch("merge_tables");
        tracing::info!(floor_id = %self.floor_id, source_1 = %id1, source_2 = %id2, merged = %merged_id, "Tables merged");
        Some(merged_id)
    }

    /// Restore the two originals a merged table replaced. `false` for a
    /// table that was never merged.
    pub fn split_table(&mut self, id: &str) -> EditorResult<bool> {
        let split = merge::split_table(&mut self.layout, id)?;
        if split {
            self.statuses.remove(id);
            if self.selected.as_deref() == Some(id) {
                self.selected = None;
            }
            self.touch("split_table");
            tracing::info!(floor_id = %self.floor_id, merged = %id, "Merged table split");
        }
        Ok(split)
    }

    // ==================== History ====================

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one edit. Undo is itself a layout-changing event: the
    /// version moves forward and the draft becomes dirty.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        let snapshot = snapshot.clone();
        self.layout.restore(&snapshot);
        self.after_history_jump("undo");
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        let snapshot = snapshot.clone();
        self.layout.restore(&snapshot);
        self.after_history_jump("redo");
        true
    }

    fn after_history_jump(&mut self, action: &str) {
        self.layout_version += 1;
        self.has_draft = true;
        self.phase = PublishPhase::DirtyDraft;
        if let Some(selected) = &self.selected
            && self.layout.table(selected).is_none()
        {
            self.selected = None;
        }
        tracing::debug!(
            floor_id = %self.floor_id,
            action = %action,
            version = self.layout_version,
            "History jump"
        );
    }

    // ==================== Validation ====================

    /// Run all invariant checks and cache the result for UI reads.
    pub fn validate(&mut self) -> &[LayoutViolation] {
        self.validation_errors = validate_layout(&self.layout, &self.config.canvas);
        &self.validation_errors
    }

    /// Last computed violations, without re-running validation.
    pub fn validation_errors(&self) -> &[LayoutViolation] {
        &self.validation_errors
    }

    // ==================== Publishing ====================

    /// Persist the draft. The store is the version authority: the echoed
    /// version replaces the local one on success. On failure local state is
    /// left exactly as before the call.
    pub async fn save_draft(&mut self) -> EditorResult<DraftReceipt> {
        let snapshot = self.layout.snapshot();
        let receipt = self
            .store
            .save_draft(&self.floor_id, &snapshot, self.layout_version)
            .await?;
        self.layout_version = receipt.version;
        self.draft_saved_at = Some(receipt.updated_at);
        self.has_draft = true;
        self.phase = PublishPhase::SavedDraft;
        tracing::info!(floor_id = %self.floor_id, version = receipt.version, "Draft saved");
        Ok(receipt)
    }

    /// Replace the in-memory layout with the persisted draft. Not an
    /// undoable edit: history is reset around the loaded state.
    pub async fn load_draft(&mut self) -> EditorResult<()> {
        let record = self
            .store
            .load_draft(&self.floor_id)
            .await?
            .ok_or_else(|| EditorError::DraftNotFound(self.floor_id.clone()))?;
        self.layout.restore(&record.layout);
        self.layout_version = record.version;
        self.history.reset(self.layout.snapshot(), "load_draft");
        self.selected = None;
        self.validation_errors.clear();
        self.has_draft = true;
        self.draft_saved_at = Some(record.updated_at);
        self.phase = PublishPhase::SavedDraft;
        tracing::info!(floor_id = %self.floor_id, version = record.version, "Draft loaded");
        Ok(())
    }

    /// Promote the draft to the live layout. Validation gates the call: a
    /// non-empty violation list fails before any I/O. A version conflict
    /// means another session advanced the draft — it is surfaced, never
    /// retried, and the local draft state is unchanged either way.
    pub async fn activate(&mut self) -> EditorResult<()> {
        let violations = validate_layout(&self.layout, &self.config.canvas);
        self.validation_errors = violations.clone();
        if !violations.is_empty() {
            tracing::warn!(
                floor_id = %self.floor_id,
                violations = violations.len(),
                "Activation blocked by validation"
            );
            return Err(EditorError::Validation(violations));
        }

        let prior_phase = self.phase;
        self.phase = PublishPhase::Activating;
        match self
            .store
            .activate(&self.floor_id, self.layout_version)
            .await
        {
            Ok(()) => {
                self.has_draft = false;
                self.last_activated_at = Some(now_millis());
                self.phase = PublishPhase::Active;
                tracing::info!(floor_id = %self.floor_id, version = self.layout_version, "Layout activated");
                Ok(())
            }
            Err(e) => {
                self.phase = prior_phase;
                tracing::warn!(floor_id = %self.floor_id, error = %e, "Activation failed");
                Err(e.into())
            }
        }
    }

    // ==================== Accessors ====================

    pub fn floor_id(&self) -> &str {
        &self.floor_id
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn layout(&self) -> &LayoutModel {
        &self.layout
    }

    pub fn history(&self) -> &LayoutHistory {
        &self.history
    }

    pub fn selected_table(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn layout_version(&self) -> i64 {
        self.layout_version
    }

    pub fn has_draft(&self) -> bool {
        self.has_draft
    }

    pub fn draft_saved_at(&self) -> Option<i64> {
        self.draft_saved_at
    }

    pub fn last_activated_at(&self) -> Option<i64> {
        self.last_activated_at
    }

    pub fn publish_phase(&self) -> PublishPhase {
        self.phase
    }

    /// Unique instance id, regenerated per editor session.
    pub fn epoch(&self) -> &str {
        &self.epoch
    }
}
