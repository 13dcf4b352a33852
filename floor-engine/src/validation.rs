//! Validation Engine
//!
//! Invariant checks run on demand and mandatorily before activation.
//! Violations are human-readable and recoverable: the operator fixes the
//! layout and retries.

use crate::geometry::{self, Aabb};
use crate::layout::LayoutModel;
use serde::{Deserialize, Serialize};
use shared::models::Canvas;
use std::collections::HashSet;
use thiserror::Error;

/// A single invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutViolation {
    /// One generic entry regardless of how many pairs intersect, to avoid
    /// error-list explosion on a dragged cluster
    #[error("tables cannot overlap")]
    TablesOverlap,

    #[error("table {id} must seat at least one guest")]
    InvalidCapacity { id: String },

    #[error("table {id} is outside the canvas")]
    OutOfBounds { id: String },

    /// Should be unreachable given engine id generation; checked anyway
    #[error("duplicate table id {id}")]
    DuplicateId { id: String },
}

/// Run all invariant checks. Empty result = publishable layout.
pub fn validate_layout(model: &LayoutModel, canvas: &Canvas) -> Vec<LayoutViolation> {
    let mut violations = Vec::new();
    let tables = model.tables();

    // 1. Pairwise overlap, O(n²) — floors are small
    let boxes: Vec<Aabb> = tables.iter().map(|t| Aabb::new(t.x, t.y, t.w, t.h)).collect();
    'overlap: for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            if geometry::overlaps(&boxes[i], &boxes[j]) {
                violations.push(LayoutViolation::TablesOverlap);
                break 'overlap;
            }
        }
    }

    // 2. Capacity
    for table in tables {
        if table.capacity < 1 {
            violations.push(LayoutViolation::InvalidCapacity {
                id: table.id.clone(),
            });
        }
    }

    // 3. Canvas bounds
    for (table, aabb) in tables.iter().zip(&boxes) {
        if !geometry::contains(canvas, aabb) {
            violations.push(LayoutViolation::OutOfBounds {
                id: table.id.clone(),
            });
        }
    }

    // 4. Duplicate ids (defensive)
    let mut seen = HashSet::new();
    for table in tables {
        if !seen.insert(table.id.as_str()) {
            violations.push(LayoutViolation::DuplicateId {
                id: table.id.clone(),
            });
        }
    }

    violations
}
