use super::*;
use crate::store::MemoryDraftStore;
use shared::models::TableCreate;

mod test_boundary;
mod test_merge;

fn create_test_editor() -> FloorEditor {
    FloorEditor::new(
        "floor-1",
        EditorConfig::default(),
        Arc::new(MemoryDraftStore::new()),
    )
}

fn create_test_editor_with_store(store: Arc<dyn DraftStore>) -> FloorEditor {
    FloorEditor::new("floor-1", EditorConfig::default(), store)
}

fn table_at(x: f64, y: f64) -> TableCreate {
    table_spec(x, y, 80.0, 80.0, 4)
}

fn table_spec(x: f64, y: f64, w: f64, h: f64, capacity: i32) -> TableCreate {
    TableCreate {
        x,
        y,
        w,
        h,
        capacity,
        rotation: None,
        shape: None,
        seats: None,
        label: None,
        zone_id: None,
    }
}
