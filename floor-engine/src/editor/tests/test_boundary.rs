use super::*;
use crate::validation::LayoutViolation;
use shared::models::{Canvas, TableUpdate};

#[test]
fn test_move_one_unit_past_canvas_width_is_rejected() {
    let mut editor = create_test_editor();
    editor.add_table(table_at(100.0, 100.0));

    let width = editor.config().canvas.width;
    let moved = editor.move_table("T1", width + 1.0, 0.0).unwrap();
    assert!(!moved);

    let table = editor.layout().table("T1").unwrap();
    assert_eq!((table.x, table.y), (100.0, 100.0));
}

#[test]
fn test_move_to_exact_edge_is_allowed() {
    let mut editor = create_test_editor();
    editor.add_table(table_at(100.0, 100.0));

    // 1120 + 80 == canvas width, flush against the edge
    assert!(editor.move_table("T1", 1120.0, 720.0).unwrap());
    let table = editor.layout().table("T1").unwrap();
    assert_eq!((table.x, table.y), (1120.0, 720.0));
}

#[test]
fn test_snap_disabled_moves_off_grid() {
    let config = EditorConfig {
        snap_to_grid: false,
        ..EditorConfig::default()
    };
    let mut editor = FloorEditor::new("floor-1", config, Arc::new(MemoryDraftStore::new()));
    editor.add_table(table_at(100.0, 100.0));

    assert!(editor.move_table("T1", 101.5, 99.3).unwrap());
    let table = editor.layout().table("T1").unwrap();
    assert_eq!((table.x, table.y), (101.5, 99.3));
}

#[test]
fn test_resize_cannot_push_table_off_canvas() {
    let mut editor = create_test_editor();
    editor.add_table(table_at(1100.0, 100.0));

    // 1100 + 200 would cross the right edge
    let resized = editor.resize_table("T1", 200.0, 80.0).unwrap();
    assert!(!resized);
    let table = editor.layout().table("T1").unwrap();
    assert_eq!((table.w, table.h), (80.0, 80.0));
}

#[test]
fn test_oversized_table_fails_bounds_validation() {
    let mut editor = create_test_editor();
    // Inserted unconditionally, then flagged
    editor.add_table(table_spec(1150.0, 100.0, 80.0, 80.0, 4));

    let violations = editor.validate();
    assert_eq!(
        violations,
        &[LayoutViolation::OutOfBounds {
            id: "T1".to_string()
        }]
    );
}

#[test]
fn test_zero_capacity_flagged_not_blocked() {
    let mut editor = create_test_editor();
    editor.add_table(table_spec(100.0, 100.0, 80.0, 80.0, 0));
    assert!(editor.layout().table("T1").is_some());

    let violations = editor.validate();
    assert_eq!(
        violations,
        &[LayoutViolation::InvalidCapacity {
            id: "T1".to_string()
        }]
    );

    // The operator fixes it interactively and the layout becomes valid
    editor
        .update_table(
            "T1",
            TableUpdate {
                capacity: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(editor.validate().is_empty());
}

#[test]
fn test_small_canvas_constrains_everything() {
    let config = EditorConfig::with_canvas(Canvas::new(200.0, 200.0, 8.0));
    let mut editor = FloorEditor::new("floor-1", config, Arc::new(MemoryDraftStore::new()));
    editor.add_table(table_at(0.0, 0.0));

    assert!(!editor.move_table("T1", 150.0, 0.0).unwrap());
    assert!(editor.move_table("T1", 120.0, 120.0).unwrap());
    assert!(!editor.resize_table("T1", 100.0, 80.0).unwrap());
}

#[test]
fn test_overlap_allowed_while_dragging() {
    let mut editor = create_test_editor();
    editor.add_table(table_at(100.0, 100.0));
    editor.add_table(table_at(300.0, 100.0));

    // Dragging T2 on top of T1 is not rejected
    assert!(editor.move_table("T2", 100.0, 100.0).unwrap());
    assert_eq!(editor.validate(), &[LayoutViolation::TablesOverlap]);

    // Move apart again and the violation clears
    assert!(editor.move_table("T2", 400.0, 100.0).unwrap());
    assert!(editor.validate().is_empty());
}
