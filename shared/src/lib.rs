//! Shared types for the floor layout editor
//!
//! Common types used across the engine and its hosts: floor models,
//! draft/publish wire structures, and utility helpers.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Canvas, DraftReceipt, DraftRecord, FloorTable, LayoutSnapshot, TableCreate, TableShape,
    TableState, TableStatus, TableUpdate, Zone, ZoneCreate, ZoneUpdate,
};
