//! Minimal editing-session walkthrough against the in-memory draft store.
//!
//! Run with: `cargo run --example editor_demo -p floor-engine`

use anyhow::Result;
use floor_engine::{
    Direction, EditorConfig, FloorEditor, MemoryDraftStore, TableCreate, ZoneCreate,
};
use std::sync::Arc;

fn four_top(x: f64, y: f64, label: &str) -> TableCreate {
    TableCreate {
        x,
        y,
        w: 80.0,
        h: 80.0,
        capacity: 4,
        rotation: None,
        shape: None,
        seats: None,
        label: Some(label.to_string()),
        zone_id: None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = Arc::new(MemoryDraftStore::new());
    let mut editor = FloorEditor::new("demo-floor", EditorConfig::from_env(), store.clone());

    let hall = editor.add_zone(ZoneCreate {
        name: "Hall".to_string(),
        color: Some("#3355ff".to_string()),
    });
    let t1 = editor.add_table(four_top(100.0, 100.0, "Window A"));
    let t2 = editor.add_table(four_top(300.0, 100.0, "Window B"));
    editor.assign_table_to_zone(&t1, Some(hall.clone()))?;
    editor.assign_table_to_zone(&t2, Some(hall))?;

    // Pull the second table alongside the first and seat a party of eight
    editor.move_table(&t2, 190.0, 100.0)?;
    let merged = editor
        .merge_tables(&t1, &t2)
        .expect("tables are adjacent after the move");
    println!(
        "merged into {merged}: capacity {}",
        editor.layout().table(&merged).unwrap().capacity
    );

    editor.nudge_table(&merged, Direction::Down)?;

    let violations = editor.validate();
    println!("violations: {violations:?}");

    editor.save_draft().await?;
    editor.activate().await?;
    println!(
        "published version {} at {:?}",
        editor.layout_version(),
        editor.last_activated_at()
    );

    // Undo the nudge: the draft cycle starts over
    editor.undo();
    println!(
        "after undo: phase {:?}, can_redo {}",
        editor.publish_phase(),
        editor.can_redo()
    );

    Ok(())
}
