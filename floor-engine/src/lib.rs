//! Floor Layout Engine
//!
//! In-memory editing engine behind the restaurant floor-plan editor:
//!
//! - **geometry**: pure AABB kernel (overlap, containment, adjacency, snap)
//! - **layout**: the entity graph of tables and zones, with id generation
//! - **history**: bounded snapshot undo/redo stack
//! - **validation**: invariant checks run on demand and before publish
//! - **merge**: merge/split composite operator for adjacent tables
//! - **store**: abstract draft store plus in-memory and JSON-file backends
//! - **editor**: the [`FloorEditor`] command facade tying it all together
//!
//! # Architecture
//!
//! ```text
//! Host intent → FloorEditor → LayoutModel mutation
//!                   ├─ LayoutHistory snapshot
//!                   ├─ layout_version bump, draft marked dirty
//!                   └─ tracing
//!
//! validate()  → violations (cached for UI reads)
//! save_draft()/load_draft()/activate() → DraftStore (async, versioned)
//! ```
//!
//! The engine is single-session by design: every in-memory command runs to
//! completion synchronously. Only the three store calls suspend. A host
//! exposing one engine to several callers must serialize access itself.

pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod history;
pub mod layout;
pub mod merge;
pub mod store;
pub mod validation;

// Re-exports
pub use config::EditorConfig;
pub use editor::{Direction, FloorEditor, PublishPhase};
pub use error::{EditorError, EditorResult};
pub use geometry::Aabb;
pub use history::{HistoryEntry, LayoutHistory};
pub use layout::LayoutModel;
pub use store::{DraftStore, JsonFileDraftStore, MemoryDraftStore, StoreError, StoreResult};
pub use validation::{LayoutViolation, validate_layout};

// Re-export shared types for convenience
pub use shared::models::{
    Canvas, DraftReceipt, DraftRecord, FloorTable, LayoutSnapshot, TableCreate, TableShape,
    TableState, TableStatus, TableUpdate, Zone, ZoneCreate, ZoneUpdate,
};
