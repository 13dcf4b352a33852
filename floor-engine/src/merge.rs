//! Merge/Split Operator
//!
//! Composite operation consuming two adjacent tables into one rectangular
//! table, retaining enough data to reconstruct the originals exactly.
//! Adjacency is the only merge precondition: zone and shape need not match.

use crate::error::{EditorError, EditorResult};
use crate::geometry;
use crate::layout::LayoutModel;
use shared::models::{FloorTable, ORIGINAL_TABLES_KEY, TableShape};

/// True iff both tables exist, differ, and sit within `threshold` layout
/// units of touching.
pub fn can_merge(model: &LayoutModel, id1: &str, id2: &str, threshold: f64) -> bool {
    if id1 == id2 {
        return false;
    }
    match (model.table_aabb(id1), model.table_aabb(id2)) {
        (Some(a), Some(b)) => geometry::adjacent(&a, &b, threshold),
        _ => false,
    }
}

/// Merge two adjacent tables. Returns the replacement table's id, or `None`
/// when the pair cannot merge. The sources are removed, not destroyed:
/// their full records ride along under `metadata.originalTables` until a
/// split restores them.
pub fn merge_tables(
    model: &mut LayoutModel,
    id1: &str,
    id2: &str,
    threshold: f64,
) -> Option<String> {
    if !can_merge(model, id1, id2, threshold) {
        return None;
    }

    let first = model.table(id1).expect("checked by can_merge").clone();
    let second = model.table(id2).expect("checked by can_merge").clone();

    // Id is allocated while both sources still count toward the suffix max
    let merged_id = model.next_table_id();

    let bounds = model
        .table_aabb(id1)
        .expect("checked by can_merge")
        .union(&model.table_aabb(id2).expect("checked by can_merge"));

    let mut metadata = serde_json::Map::new();
    metadata.insert(
        ORIGINAL_TABLES_KEY.to_string(),
        serde_json::to_value([&first, &second]).expect("table records serialize to plain JSON"),
    );

    let merged = FloorTable {
        id: merged_id.clone(),
        x: bounds.x,
        y: bounds.y,
        w: bounds.w,
        h: bounds.h,
        rotation: 0.0,
        // Merged tables are never round
        shape: TableShape::Rect,
        capacity: first.capacity + second.capacity,
        seats: first.seats + second.seats,
        label: Some(format!(
            "{}+{}",
            first.display_name(),
            second.display_name()
        )),
        zone_id: first.zone_id.clone().or_else(|| second.zone_id.clone()),
        child_ids: Some(vec![first.id.clone(), second.id.clone()]),
        metadata,
    };

    model.delete_table(id1).expect("checked by can_merge");
    model.delete_table(id2).expect("checked by can_merge");
    model.insert_table(merged);
    Some(merged_id)
}

/// Split a merged table back into its originals, restored verbatim:
/// geometry, ids, zone, and capacity all come from the stored records, not
/// from recomputation. Returns `false` for a table that was never merged.
pub fn split_table(model: &mut LayoutModel, id: &str) -> EditorResult<bool> {
    let table = model
        .table(id)
        .ok_or_else(|| EditorError::TableNotFound(id.to_string()))?;

    let Some(value) = table.metadata.get(ORIGINAL_TABLES_KEY) else {
        return Ok(false);
    };
    let originals: Vec<FloorTable> = match serde_json::from_value(value.clone()) {
        Ok(originals) => originals,
        Err(e) => {
            tracing::warn!(table_id = %id, error = %e, "Merged table metadata is unreadable, refusing to split");
            return Ok(false);
        }
    };

    model.delete_table(id)?;
    for original in originals {
        model.insert_table(original);
    }
    Ok(true)
}
