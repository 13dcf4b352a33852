use super::*;
use shared::models::{TableShape, TableStatus};

// ========================================================================
// Reference scenario: 1200×800 canvas, grid 8, two 80×80 four-tops
// ========================================================================

#[test]
fn test_merge_scenario_end_to_end() {
    // Free-hand dragging, no grid snapping
    let config = EditorConfig {
        snap_to_grid: false,
        ..EditorConfig::default()
    };
    let mut editor = FloorEditor::new("floor-1", config, Arc::new(MemoryDraftStore::new()));

    assert_eq!(editor.add_table(table_at(100.0, 100.0)), "T1");
    assert_eq!(editor.add_table(table_at(300.0, 100.0)), "T2");

    // Gap of 120 exceeds the 16-unit threshold (2 grid units)
    assert!(!editor.can_merge("T1", "T2"));
    assert!(editor.merge_tables("T1", "T2").is_none());

    // Gap of 10 is within the threshold
    assert!(editor.move_table("T2", 190.0, 100.0).unwrap());
    assert!(editor.can_merge("T1", "T2"));

    let merged_id = editor.merge_tables("T1", "T2").unwrap();
    let merged = editor.layout().table(&merged_id).unwrap();
    assert_eq!(merged.capacity, 8);
    assert_eq!(merged.shape, TableShape::Rect);
    assert_eq!(
        (merged.x, merged.y, merged.w, merged.h),
        (100.0, 100.0, 170.0, 80.0)
    );

    assert!(editor.validate().is_empty());
}

#[test]
fn test_merge_then_split_round_trip() {
    let mut editor = create_test_editor();
    editor.add_table(table_at(100.0, 100.0));
    editor.add_table(table_at(190.0, 100.0));
    let t1 = editor.layout().table("T1").unwrap().clone();
    let t2 = editor.layout().table("T2").unwrap().clone();

    let merged_id = editor.merge_tables("T1", "T2").unwrap();
    assert!(editor.split_table(&merged_id).unwrap());

    assert_eq!(editor.layout().table("T1").unwrap(), &t1);
    assert_eq!(editor.layout().table("T2").unwrap(), &t2);
    assert!(editor.layout().table(&merged_id).is_none());
}

#[test]
fn test_split_non_merged_table_returns_false() {
    let mut editor = create_test_editor();
    editor.add_table(table_at(100.0, 100.0));
    assert!(!editor.split_table("T1").unwrap());
}

#[test]
fn test_split_unknown_table_errors() {
    let mut editor = create_test_editor();
    let err = editor.split_table("T9").unwrap_err();
    assert!(matches!(err, EditorError::TableNotFound(_)));
}

#[test]
fn test_merge_clears_source_status_and_selection() {
    let mut editor = create_test_editor();
    editor.add_table(table_at(100.0, 100.0));
    editor.add_table(table_at(190.0, 100.0));
    editor
        .update_table_status("T1", TableStatus::Seated)
        .unwrap();
    editor.select_table(Some("T2")).unwrap();

    let merged_id = editor.merge_tables("T1", "T2").unwrap();
    assert!(editor.table_status("T1").is_none());
    assert!(editor.selected_table().is_none());
    assert!(editor.layout().table(&merged_id).is_some());
}

#[test]
fn test_merged_table_can_merge_again() {
    let mut editor = create_test_editor();
    editor.add_table(table_at(100.0, 100.0));
    editor.add_table(table_at(190.0, 100.0));
    editor.add_table(table_at(370.0, 100.0));

    let first = editor.merge_tables("T1", "T2").unwrap();
    // The union box ends at x=270; gap to T3 is 100, too far
    assert!(!editor.can_merge(&first, "T3"));

    editor.move_table("T3", 280.0, 100.0).unwrap();
    let second = editor.merge_tables(&first, "T3").unwrap();
    let table = editor.layout().table(&second).unwrap();
    assert_eq!(table.capacity, 12);

    // Splitting the outer merge restores the inner merged table intact
    assert!(editor.split_table(&second).unwrap());
    let inner = editor.layout().table(&first).unwrap();
    assert_eq!(inner.capacity, 8);
    assert!(inner.is_merged());
    assert!(editor.split_table(&first).unwrap());
    assert_eq!(editor.layout().tables().len(), 3);
}
