//! Draft Store
//!
//! Abstract persistence boundary for the publishing protocol. The engine
//! only depends on the operation shapes: load a draft, save a draft, and
//! atomically promote a draft to the active layout guarded by an expected
//! version (optimistic concurrency — a concurrent editor session advances
//! the version and activation must surface the conflict, never retry).
//!
//! The persisted draft and the persisted active layout are two separate
//! records; the engine only ever writes the draft.

mod file;
mod memory;

pub use file::JsonFileDraftStore;
pub use memory::MemoryDraftStore;

use async_trait::async_trait;
use shared::models::{DraftReceipt, DraftRecord, LayoutSnapshot};
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("floor {0} not found")]
    NotFound(String),

    #[error("draft version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: i64, actual: i64 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Remote draft/activation collaborator.
///
/// The store is the version authority: `save_draft` may assign a version
/// of its own rather than trusting the client's, and callers must adopt
/// the echoed value.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Fetch the persisted draft, `None` when the floor has never saved one.
    async fn load_draft(&self, floor_id: &str) -> StoreResult<Option<DraftRecord>>;

    /// Persist the draft layout and return the authoritative version.
    async fn save_draft(
        &self,
        floor_id: &str,
        layout: &LayoutSnapshot,
        version: i64,
    ) -> StoreResult<DraftReceipt>;

    /// Promote the saved draft to the active layout iff its version still
    /// equals `expect_version`.
    async fn activate(&self, floor_id: &str, expect_version: i64) -> StoreResult<()>;

    /// Fetch the currently active layout, `None` before the first activation.
    async fn load_active(&self, floor_id: &str) -> StoreResult<Option<DraftRecord>>;
}
